mod access_control;
mod connector;
mod shelter_management;
pub use access_control::{DefaultACPlatform, ACPlatform};
pub use connector::ConnectorOption;
pub use shelter_management::{DefaultSMPlatform, SMPlatform};

pub trait PlatformUrl {
    fn url(&self) -> &str;
}
