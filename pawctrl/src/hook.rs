//! Hooks run by the platform after the creation of entities.

use pawcore::{
    animal::NewAnimal,
    task::NewTask,
};

/// Produces the follow-up tasks for an animal that is about to be
/// created.  The tasks are stored together with the animal and will be
/// linked to it; hooks are never run when an animal is updated.
#[cfg_attr(test, mockall::automock)]
pub trait AnimalCreationHook: Send + Sync {
    fn follow_up_tasks(&self, animal: &NewAnimal) -> Vec<NewTask>;
}

/// The onboarding checklist for the species of the animal, placed at
/// the shelter the animal is taken into.
#[derive(Clone, Copy, Debug, Default)]
pub struct OnboardingTasks;

impl AnimalCreationHook for OnboardingTasks {
    fn follow_up_tasks(&self, animal: &NewAnimal) -> Vec<NewTask> {
        animal.species()
            .onboarding_tasks()
            .iter()
            .map(|task| task.to_new_task(animal.shelter_id))
            .collect()
    }
}
