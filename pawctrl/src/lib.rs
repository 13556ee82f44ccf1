pub mod actor;
pub mod error;
pub mod hook;
pub mod platform;

pub(crate) mod chrono {
    #[cfg(not(test))]
    pub use ::chrono::Utc;
    #[cfg(test)]
    pub use test_paw::chrono::Utc;
}
