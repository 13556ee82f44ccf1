use pawcore::person::{
    NewPerson,
    Person,
    Persons,
    PersonKind,
    PersonType,
    Worker,
};

use crate::{
    actor::Actor,
    error::{
        not_found,
        CtrlError,
        PlatformError,
    },
    platform::{
        NewWorker,
        Platform,
    },
};

impl Platform {
    pub async fn get_person(
        &self,
        id: i64,
    ) -> Result<Person, PlatformError> {
        self.sm_platform
            .get_person(id)
            .await
            .map_err(not_found(format!("person {id}")))
    }

    pub async fn list_workers(&self) -> Result<Persons, PlatformError> {
        Ok(self.sm_platform.list_persons(Some(PersonType::Worker)).await?)
    }

    /// The worker behind the login.
    pub async fn get_actor(
        &self,
        username: &str,
    ) -> Result<Actor, PlatformError> {
        let person = self.sm_platform
            .get_worker_by_username(username)
            .await?
            .ok_or_else(|| CtrlError::NotAWorker(username.to_string()))?;
        Ok(Actor::try_from(person)?)
    }

    /// Hire a worker at the shelter, creating the login for the worker
    /// with the initial password.
    pub async fn hire_worker(
        &self,
        worker: &NewWorker,
        password: &str,
    ) -> Result<Actor, PlatformError> {
        self.get_shelter(worker.shelter_id).await?;
        let person_id = self.sm_platform
            .add_person(&NewPerson {
                name: worker.name.clone(),
                phone_number: worker.phone_number.clone(),
                email: worker.email.clone(),
                address_id: worker.address_id,
                kind: PersonKind::Worker(Worker {
                    username: worker.username.clone(),
                    role: worker.role,
                    hire_ts: self.now(),
                    shelter_id: worker.shelter_id,
                }),
            })
            .await?;
        let user = self.ac_platform.create_user(&worker.username).await?;
        user.reset_password(password, password).await?;
        log::info!(
            "hired {} as {} at shelter {} with login {:?}",
            worker.name,
            worker.role,
            worker.shelter_id,
            worker.username,
        );
        Ok(self.get_person(person_id).await?.try_into()?)
    }
}
