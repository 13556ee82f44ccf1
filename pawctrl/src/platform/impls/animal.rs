use pawcore::{
    animal::{
        Animal,
        AnimalFilterOptions,
        AnimalQuery,
        Animals,
        NewAnimal,
    },
    task::{
        NewTask,
        RequiredRole,
    },
};

use crate::{
    actor::Actor,
    error::{
        not_found,
        CtrlError,
        PlatformError,
    },
    platform::Platform,
};
use super::reference::References;

/// Number of animals shown on the front page.
pub const FEATURED_ANIMALS: i64 = 3;

impl Platform {
    /// Store the new animal along with the follow-up tasks produced by
    /// every registered creation hook.
    pub async fn create_animal(
        &self,
        animal: &NewAnimal,
    ) -> Result<i64, PlatformError> {
        self.check_references(References {
            shelter_id: Some(animal.shelter_id),
            ..Default::default()
        }).await?;
        let tasks = self.animal_creation_hooks
            .iter()
            .flat_map(|hook| hook.follow_up_tasks(animal))
            .collect::<Vec<NewTask>>();
        let id = self.sm_platform
            .add_animal(animal, &tasks)
            .await?;
        log::info!(
            "created {} {:?} with id {id} along with {} follow-up task(s)",
            animal.species(),
            animal.name,
            tasks.len(),
        );
        Ok(id)
    }

    pub async fn get_animal(
        &self,
        id: i64,
    ) -> Result<Animal, PlatformError> {
        self.sm_platform
            .get_animal(id)
            .await
            .map_err(not_found(format!("animal {id}")))
    }

    pub async fn list_animals(
        &self,
        query: &AnimalQuery,
    ) -> Result<Animals, PlatformError> {
        Ok(self.sm_platform.list_animals(query).await?)
    }

    /// Update the animal; the species of a stored animal never changes.
    pub async fn update_animal(
        &self,
        id: i64,
        animal: &NewAnimal,
    ) -> Result<(), PlatformError> {
        let current = self.get_animal(id).await?;
        if current.species() != animal.species() {
            Err(CtrlError::KindMismatch(format!(
                "animal {id} is a {}, not a {}",
                current.species(),
                animal.species(),
            )))?
        }
        self.check_references(References {
            shelter_id: Some(animal.shelter_id),
            ..Default::default()
        }).await?;
        self.sm_platform
            .update_animal(id, animal)
            .await?
            .then_some(())
            .ok_or_else(|| CtrlError::NotFound(format!("animal {id}")).into())
    }

    pub async fn delete_animal(
        &self,
        actor: &Actor,
        id: i64,
    ) -> Result<(), PlatformError> {
        actor.require(RequiredRole::Manager)?;
        self.sm_platform
            .delete_animal(id)
            .await?
            .then_some(())
            .ok_or_else(|| CtrlError::NotFound(format!("animal {id}")))?;
        log::info!("animal {id} deleted by {}", actor.username);
        Ok(())
    }

    pub async fn animal_filter_options(
        &self,
    ) -> Result<AnimalFilterOptions, PlatformError> {
        Ok(self.sm_platform.animal_filter_options().await?)
    }

    pub async fn featured_animals(
        &self,
    ) -> Result<Animals, PlatformError> {
        Ok(self.sm_platform.list_featured_animals(FEATURED_ANIMALS).await?)
    }
}
