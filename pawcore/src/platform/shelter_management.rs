use crate::{
    address::traits::AddressBackend,
    animal::traits::AnimalBackend,
    comment::traits::CommentBackend,
    person::traits::PersonBackend,
    platform::PlatformUrl,
    shelter::traits::ShelterBackend,
    task::traits::{
        TaskBackend,
        TaskItemBackend,
    },
};

/// SMPlatform - Shelter Management Platform
///
/// This platform persists everything about the shelters: their
/// addresses, the people, the animals and the tasks and comments
/// about them.
///
/// This trait is applicable to everything that correctly implements the
/// relevant backends that compose this trait.
pub trait SMPlatform: AddressBackend
    + AnimalBackend
    + CommentBackend
    + PersonBackend
    + ShelterBackend
    + TaskBackend
    + TaskItemBackend

    + PlatformUrl

    + Send
    + Sync
{
    fn as_dyn(&self) -> &dyn SMPlatform;
}

pub trait DefaultSMPlatform: SMPlatform {}

impl<P: AddressBackend
    + AnimalBackend
    + CommentBackend
    + PersonBackend
    + ShelterBackend
    + TaskBackend
    + TaskItemBackend

    + PlatformUrl

    + DefaultSMPlatform

    + Send
    + Sync
> SMPlatform for P {
    fn as_dyn(&self) -> &(dyn SMPlatform) {
        self
    }
}
