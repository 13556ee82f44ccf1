use async_trait::async_trait;
use crate::error::BackendError;
use super::{
    NewPerson,
    Person,
    Persons,
    PersonType,
};

#[async_trait]
pub trait PersonBackend {
    /// Stores the base person along with the row for its kind.
    async fn add_person(
        &self,
        person: &NewPerson,
    ) -> Result<i64, BackendError>;
    async fn get_person(
        &self,
        id: i64,
    ) -> Result<Person, BackendError>;
    /// Returns the earliest person registered with the email.
    async fn find_person_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Person>, BackendError>;
    async fn get_worker_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Person>, BackendError>;
    async fn list_persons(
        &self,
        person_type: Option<PersonType>,
    ) -> Result<Persons, BackendError>;
    async fn delete_person(
        &self,
        id: i64,
    ) -> Result<bool, BackendError>;
}
