use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum BackendError {
    #[cfg(feature = "sqlx")]
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
    /// Denotes custom application invariant; generally informative.
    #[error("application invariant violated: {0}")]
    AppInvariantViolation(String),
    #[error("unknown error")]
    Unknown,
}

impl BackendError {
    /// Whether this error is the backend reporting the absence of the
    /// requested row.
    pub fn is_not_found(&self) -> bool {
        match self {
            #[cfg(feature = "sqlx")]
            BackendError::Sqlx(sqlx::Error::RowNotFound) => true,
            _ => false,
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ValueError {
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error("unsupported value: {0}")]
    Unsupported(String),
    #[error("uninitialized value")]
    Uninitialized,
}

/// Field name to the list of messages describing why the submitted
/// value was rejected.
#[derive(Clone, Debug, Default, PartialEq, Error, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ValidationError(BTreeMap<String, Vec<String>>);

mod validation {
    use std::{
        collections::BTreeMap,
        fmt,
        ops::Deref,
    };
    use super::ValidationError;

    impl ValidationError {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn add(&mut self, field: &str, message: impl Into<String>) {
            self.0.entry(field.to_string())
                .or_default()
                .push(message.into());
        }

        /// Returns `value` if no errors were recorded.
        pub fn check<T>(self, value: T) -> Result<T, Self> {
            if self.0.is_empty() {
                Ok(value)
            } else {
                Err(self)
            }
        }
    }

    impl Deref for ValidationError {
        type Target = BTreeMap<String, Vec<String>>;

        fn deref(&self) -> &Self::Target {
            &self.0
        }
    }

    impl fmt::Display for ValidationError {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "invalid value for field(s): ")?;
            let mut iter = self.0.keys();
            if let Some(key) = iter.next() {
                write!(f, "{key}")?;
            }
            for key in iter {
                write!(f, ", {key}")?;
            }
            Ok(())
        }
    }
}
