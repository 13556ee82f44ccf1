pub mod ac;
pub mod address;
pub mod animal;
pub mod comment;
pub mod error;
pub mod form;
pub mod person;
pub mod platform;
pub mod shelter;
pub mod task;

mod serde_helpers;

pub(crate) mod chrono {
    pub use ::chrono::*;
}
