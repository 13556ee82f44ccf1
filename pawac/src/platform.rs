use pawcore::{
    ac::session::SessionFactory,
    platform::ACPlatform,
};
use std::sync::Arc;

#[derive(Default)]
pub struct Builder {
    ac_platform: Option<Box<dyn ACPlatform>>,
    // keep only the most recent password for each user
    password_autopurge: bool,
    session_factory: SessionFactory,
}

struct PlatformInner {
    ac_platform: Box<dyn ACPlatform>,
    password_autopurge: bool,
    session_factory: SessionFactory,
}

/// The access control platform: the login accounts for the staff of
/// the shelters, their passwords and their sessions.
#[derive(Clone)]
pub struct Platform(Arc<PlatformInner>);

mod impls;
