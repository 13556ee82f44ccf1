use crate::{
    platform::PlatformUrl,
    ac::traits::{
        SessionBackend,
        UserBackend,
    },
};

/// ACPlatform - Access Control Platform
///
/// This platform is used to persist the login accounts of shelter staff
/// along with their passwords and sessions.
///
/// This trait is applicable to everything that correctly implements the
/// relevant backends that compose this trait.
pub trait ACPlatform: UserBackend
    + SessionBackend

    + PlatformUrl

    + Send
    + Sync
{
    fn as_dyn(&self) -> &dyn ACPlatform;
}

pub trait DefaultACPlatform: ACPlatform {}

impl<P: UserBackend
    + SessionBackend

    + PlatformUrl

    + DefaultACPlatform

    + Send
    + Sync
> ACPlatform for P {
    fn as_dyn(&self) -> &(dyn ACPlatform) {
        self
    }
}
