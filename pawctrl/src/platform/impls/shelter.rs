use pawcore::{
    address::NewAddress,
    shelter::{
        NewShelter,
        Shelter,
        Shelters,
    },
};

use crate::{
    error::{
        not_found,
        PlatformError,
    },
    platform::Platform,
};

impl Platform {
    pub async fn create_shelter(
        &self,
        name: &str,
        phone_number: &str,
        email_address: &str,
        address: &NewAddress,
    ) -> Result<i64, PlatformError> {
        let address_id = self.resolve_address(address).await?;
        let id = self.sm_platform
            .add_shelter(&NewShelter {
                name: name.to_string(),
                phone_number: phone_number.to_string(),
                email_address: email_address.to_string(),
                address_id,
            })
            .await?;
        log::info!("created shelter {name:?} with id {id}");
        Ok(id)
    }

    pub async fn get_shelter(
        &self,
        id: i64,
    ) -> Result<Shelter, PlatformError> {
        self.sm_platform
            .get_shelter(id)
            .await
            .map_err(not_found(format!("shelter {id}")))
    }

    pub async fn list_shelters(&self) -> Result<Shelters, PlatformError> {
        Ok(self.sm_platform.list_shelters().await?)
    }
}
