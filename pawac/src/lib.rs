#[cfg(feature = "axum-login")]
pub mod axum_login;
pub mod error;
pub mod password;
pub mod platform;
pub mod session;
pub mod user;

pub use platform::Platform;
