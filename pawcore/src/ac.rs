pub mod session;
pub mod traits;
pub mod user;
