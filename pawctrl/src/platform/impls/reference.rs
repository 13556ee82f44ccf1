use pawcore::error::{
    BackendError,
    ValidationError,
};

use crate::{
    error::PlatformError,
    platform::Platform,
};

pub(crate) const INVALID_CHOICE: &str =
    "Select a valid choice. That choice is not one of the available choices.";

/// The rows a submission refers to, keyed by the submitted field.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct References {
    pub shelter_id: Option<i64>,
    pub assignee_id: Option<i64>,
    pub animal_id: Option<i64>,
}

fn missing(
    errors: &mut ValidationError,
    field: &str,
    e: BackendError,
) -> Result<(), BackendError> {
    if e.is_not_found() {
        errors.add(field, INVALID_CHOICE);
        Ok(())
    } else {
        Err(e)
    }
}

impl Platform {
    /// Every referenced row must exist and an assignee must be a worker;
    /// each violation is reported against its field.
    pub(crate) async fn check_references(
        &self,
        references: References,
    ) -> Result<(), PlatformError> {
        let mut errors = ValidationError::new();
        if let Some(id) = references.shelter_id {
            if let Err(e) = self.sm_platform.get_shelter(id).await {
                missing(&mut errors, "shelter", e)?;
            }
        }
        if let Some(id) = references.assignee_id {
            match self.sm_platform.get_person(id).await {
                Ok(person) if person.worker().is_some() => (),
                Ok(_) => errors.add("assignee", INVALID_CHOICE),
                Err(e) => missing(&mut errors, "assignee", e)?,
            }
        }
        if let Some(id) = references.animal_id {
            if let Err(e) = self.sm_platform.get_animal(id).await {
                missing(&mut errors, "animal", e)?;
            }
        }
        Ok(errors.check(())?)
    }
}
