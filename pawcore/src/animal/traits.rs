use async_trait::async_trait;
use crate::{
    error::BackendError,
    task::NewTask,
};
use super::{
    Animal,
    AnimalFilterOptions,
    AnimalQuery,
    Animals,
    NewAnimal,
};

#[async_trait]
pub trait AnimalBackend {
    /// Stores the animal, the row for its kind and the follow-up tasks
    /// as a single unit.  Each of the follow-up tasks will be linked to
    /// the new animal.
    async fn add_animal(
        &self,
        animal: &NewAnimal,
        follow_up_tasks: &[NewTask],
    ) -> Result<i64, BackendError>;
    async fn get_animal(
        &self,
        id: i64,
    ) -> Result<Animal, BackendError>;
    async fn list_animals(
        &self,
        query: &AnimalQuery,
    ) -> Result<Animals, BackendError>;
    /// Returns false if no animal of the same kind exists for the id.
    async fn update_animal(
        &self,
        id: i64,
        animal: &NewAnimal,
    ) -> Result<bool, BackendError>;
    async fn delete_animal(
        &self,
        id: i64,
    ) -> Result<bool, BackendError>;
    async fn animal_filter_options(
        &self,
    ) -> Result<AnimalFilterOptions, BackendError>;
    /// A random selection of up to `limit` animals.
    async fn list_featured_animals(
        &self,
        limit: i64,
    ) -> Result<Animals, BackendError>;
}
