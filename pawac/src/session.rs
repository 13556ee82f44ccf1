use pawcore::ac::session;

use crate::{
    Platform,
    user::User,
};

/// A logged in session along with the user it belongs to.
#[derive(Clone)]
pub struct Session {
    platform: Platform,
    session: session::Session,
    user: User,
}

mod impls;
