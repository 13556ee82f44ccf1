use pawcore::{
    person::{
        Person,
        PersonKind,
        WorkerRole,
    },
    task::RequiredRole,
};
use serde::{Deserialize, Serialize};

use crate::error::CtrlError;

/// The worker performing an operation.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Actor {
    pub person_id: i64,
    pub name: String,
    pub username: String,
    pub role: WorkerRole,
    pub shelter_id: i64,
}

impl TryFrom<Person> for Actor {
    type Error = CtrlError;

    fn try_from(person: Person) -> Result<Self, Self::Error> {
        match person.kind {
            PersonKind::Worker(worker) => Ok(Actor {
                person_id: person.id,
                name: person.name,
                username: worker.username,
                role: worker.role,
                shelter_id: worker.shelter_id,
            }),
            _ => Err(CtrlError::NotAWorker(person.email)),
        }
    }
}

impl Actor {
    /// Require that the worker may act on something gated behind the
    /// role.
    pub fn require(&self, required: RequiredRole) -> Result<(), CtrlError> {
        required.is_satisfied_by(self.role)
            .then_some(())
            .ok_or(CtrlError::RoleRequired {
                required,
                actual: self.role,
            })
    }

    pub fn is_manager(&self) -> bool {
        self.role == WorkerRole::Manager
    }
}
