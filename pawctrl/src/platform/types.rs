use pawcore::{
    animal::Animals,
    comment::Comments,
    person::{
        Persons,
        WorkerRole,
    },
    platform::SMPlatform,
    task::Task,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::hook::AnimalCreationHook;

#[derive(Clone)]
pub struct Platform {
    pub ac_platform: pawac::Platform,
    pub sm_platform: Arc<dyn SMPlatform>,
    pub(crate) animal_creation_hooks: Arc<Vec<Box<dyn AnimalCreationHook>>>,
}

/// A task along with its items and the comments made on it.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct TaskDetail {
    #[serde(flatten)]
    pub task: Task,
    pub comments: Comments,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Dashboard {
    pub tasks: Vec<TaskDetail>,
    pub animals: Animals,
    pub workers: Persons,
}

/// The records an intake submission resolved to or created.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct IntakeOutcome {
    pub address_id: i64,
    pub person_id: i64,
    pub task_id: i64,
}

/// A worker to be hired along with their login.
#[derive(Clone, Debug, PartialEq)]
pub struct NewWorker {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub address_id: i64,
    pub username: String,
    pub role: WorkerRole,
    pub shelter_id: i64,
}
