use pawcore::platform::SMPlatform;
use std::sync::Arc;

use crate::{
    chrono::Utc,
    hook::{
        AnimalCreationHook,
        OnboardingTasks,
    },
    platform::Platform,
};

impl Platform {
    /// A platform with the onboarding checklist registered as the hook
    /// for newly created animals.
    pub fn new(
        ac_platform: pawac::Platform,
        sm_platform: impl SMPlatform + 'static,
    ) -> Self {
        Self::with_hooks(ac_platform, sm_platform, vec![Box::new(OnboardingTasks)])
    }

    pub fn with_hooks(
        ac_platform: pawac::Platform,
        sm_platform: impl SMPlatform + 'static,
        animal_creation_hooks: Vec<Box<dyn AnimalCreationHook>>,
    ) -> Self {
        Self {
            ac_platform,
            sm_platform: Arc::new(sm_platform),
            animal_creation_hooks: Arc::new(animal_creation_hooks),
        }
    }

    pub fn sm_platform(&self) -> &dyn SMPlatform {
        self.sm_platform.as_ref()
    }

    pub(crate) fn now(&self) -> i64 {
        Utc::now().timestamp()
    }
}

mod animal;
mod comment;
mod dashboard;
mod intake;
mod person;
mod reference;
mod shelter;
mod task;
