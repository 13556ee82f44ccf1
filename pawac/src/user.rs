use pawcore::ac::user;

use crate::Platform;

/// A login account bound to the platform that loaded it.
#[derive(Clone)]
pub struct User {
    platform: Platform,
    user: user::User,
}

mod impls;
