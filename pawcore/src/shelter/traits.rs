use async_trait::async_trait;
use crate::error::BackendError;
use super::{
    NewShelter,
    Shelter,
    Shelters,
};

#[async_trait]
pub trait ShelterBackend {
    async fn add_shelter(
        &self,
        shelter: &NewShelter,
    ) -> Result<i64, BackendError>;
    async fn get_shelter(
        &self,
        id: i64,
    ) -> Result<Shelter, BackendError>;
    async fn list_shelters(
        &self,
    ) -> Result<Shelters, BackendError>;
    async fn update_shelter(
        &self,
        id: i64,
        shelter: &NewShelter,
    ) -> Result<bool, BackendError>;
    /// Removes the shelter, along with everything that belongs to it.
    async fn delete_shelter(
        &self,
        id: i64,
    ) -> Result<bool, BackendError>;
}
