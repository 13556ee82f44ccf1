use async_trait::async_trait;
use crate::error::BackendError;
use super::{
    Address,
    NewAddress,
};

#[async_trait]
pub trait AddressBackend {
    async fn add_address(
        &self,
        address: &NewAddress,
    ) -> Result<i64, BackendError>;
    async fn get_address(
        &self,
        id: i64,
    ) -> Result<Address, BackendError>;
    /// Locate an address that matches every field exactly, where an
    /// absent second line only matches another absent second line.
    async fn find_address(
        &self,
        address: &NewAddress,
    ) -> Result<Option<Address>, BackendError>;
}
