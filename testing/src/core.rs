use async_trait::async_trait;
use mockall::mock;
use pawcore::{
    address::{
        Address,
        NewAddress,
        traits::AddressBackend,
    },
    animal::{
        Animal,
        AnimalFilterOptions,
        AnimalQuery,
        Animals,
        NewAnimal,
        traits::AnimalBackend,
    },
    comment::{
        Comment,
        Comments,
        CommentTarget,
        NewComment,
        traits::CommentBackend,
    },
    error::BackendError,
    person::{
        NewPerson,
        Person,
        Persons,
        PersonType,
        traits::PersonBackend,
    },
    platform::{
        DefaultSMPlatform,
        PlatformUrl,
    },
    shelter::{
        NewShelter,
        Shelter,
        Shelters,
        traits::ShelterBackend,
    },
    task::{
        NewTask,
        Task,
        TaskItem,
        TaskItems,
        TaskQuery,
        Tasks,
        TaskUpdate,
        traits::{
            TaskBackend,
            TaskItemBackend,
        },
    },
};

mock! {
    pub Platform {}

    #[async_trait]
    impl AddressBackend for Platform {
        async fn add_address(&self, address: &NewAddress) -> Result<i64, BackendError>;
        async fn get_address(&self, id: i64) -> Result<Address, BackendError>;
        async fn find_address(&self, address: &NewAddress) -> Result<Option<Address>, BackendError>;
    }

    #[async_trait]
    impl AnimalBackend for Platform {
        async fn add_animal(
            &self,
            animal: &NewAnimal,
            follow_up_tasks: &[NewTask],
        ) -> Result<i64, BackendError>;
        async fn get_animal(&self, id: i64) -> Result<Animal, BackendError>;
        async fn list_animals(&self, query: &AnimalQuery) -> Result<Animals, BackendError>;
        async fn update_animal(&self, id: i64, animal: &NewAnimal) -> Result<bool, BackendError>;
        async fn delete_animal(&self, id: i64) -> Result<bool, BackendError>;
        async fn animal_filter_options(&self) -> Result<AnimalFilterOptions, BackendError>;
        async fn list_featured_animals(&self, limit: i64) -> Result<Animals, BackendError>;
    }

    #[async_trait]
    impl CommentBackend for Platform {
        async fn add_comment(&self, comment: &NewComment) -> Result<i64, BackendError>;
        async fn get_comment(&self, id: i64) -> Result<Comment, BackendError>;
        async fn list_comments(&self, target: CommentTarget) -> Result<Comments, BackendError>;
    }

    #[async_trait]
    impl PersonBackend for Platform {
        async fn add_person(&self, person: &NewPerson) -> Result<i64, BackendError>;
        async fn get_person(&self, id: i64) -> Result<Person, BackendError>;
        async fn find_person_by_email(&self, email: &str) -> Result<Option<Person>, BackendError>;
        async fn get_worker_by_username(&self, username: &str) -> Result<Option<Person>, BackendError>;
        async fn list_persons(&self, person_type: Option<PersonType>) -> Result<Persons, BackendError>;
        async fn delete_person(&self, id: i64) -> Result<bool, BackendError>;
    }

    #[async_trait]
    impl ShelterBackend for Platform {
        async fn add_shelter(&self, shelter: &NewShelter) -> Result<i64, BackendError>;
        async fn get_shelter(&self, id: i64) -> Result<Shelter, BackendError>;
        async fn list_shelters(&self) -> Result<Shelters, BackendError>;
        async fn update_shelter(&self, id: i64, shelter: &NewShelter) -> Result<bool, BackendError>;
        async fn delete_shelter(&self, id: i64) -> Result<bool, BackendError>;
    }

    #[async_trait]
    impl TaskBackend for Platform {
        async fn add_task(&self, task: &NewTask) -> Result<i64, BackendError>;
        async fn get_task(&self, id: i64) -> Result<Task, BackendError>;
        async fn update_task(&self, id: i64, update: &TaskUpdate) -> Result<bool, BackendError>;
        async fn delete_task(&self, id: i64) -> Result<bool, BackendError>;
        async fn set_task_completed_ts(
            &self,
            id: i64,
            completed_ts: Option<i64>,
        ) -> Result<bool, BackendError>;
        async fn list_tasks(&self, query: &TaskQuery) -> Result<Tasks, BackendError>;
    }

    #[async_trait]
    impl TaskItemBackend for Platform {
        async fn add_task_item(&self, task_id: i64, title: &str) -> Result<i64, BackendError>;
        async fn get_task_item(&self, id: i64) -> Result<TaskItem, BackendError>;
        async fn list_task_items(&self, task_id: i64) -> Result<TaskItems, BackendError>;
        async fn set_task_item_completed_ts(
            &self,
            id: i64,
            completed_ts: Option<i64>,
        ) -> Result<bool, BackendError>;
    }
}

impl PlatformUrl for MockPlatform {
    fn url(&self) -> &str {
        "mock://platform"
    }
}

impl DefaultSMPlatform for MockPlatform {}
