use pawcore::{
    error::{
        BackendError,
        ValidationError,
        ValueError,
    },
    person::WorkerRole,
    task::RequiredRole,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error(transparent)]
    AcError(#[from] pawac::error::Error),
    #[error(transparent)]
    BackendError(#[from] BackendError),
    #[error(transparent)]
    CtrlError(#[from] CtrlError),
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    #[error(transparent)]
    ValueError(#[from] ValueError),
}

#[derive(Debug, PartialEq, Error)]
pub enum CtrlError {
    /// The acting worker lacks the role required by the operation.
    #[error("role {required} is required, but the worker is a {actual}")]
    RoleRequired {
        required: RequiredRole,
        actual: WorkerRole,
    },
    /// The entity does not exist.
    #[error("{0} not found")]
    NotFound(String),
    /// The stored entity is of a different kind than what was provided.
    #[error("kind mismatch: {0}")]
    KindMismatch(String),
    /// The username does not belong to a worker.
    #[error("no worker with the username {0:?}")]
    NotAWorker(String),
}

impl PlatformError {
    /// Whether the error is the result of the entity being requested
    /// not existing.
    pub fn is_not_found(&self) -> bool {
        match self {
            PlatformError::BackendError(e) => e.is_not_found(),
            PlatformError::CtrlError(CtrlError::NotFound(_)) => true,
            _ => false,
        }
    }
}

/// Convert the absence of a row into `CtrlError::NotFound` for the
/// named entity.
pub(crate) fn not_found(what: impl Into<String>) -> impl FnOnce(BackendError) -> PlatformError {
    let what = what.into();
    move |e| if e.is_not_found() {
        CtrlError::NotFound(what).into()
    } else {
        e.into()
    }
}
