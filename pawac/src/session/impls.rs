use pawcore::ac::session;
use std::fmt;

use crate::{
    error::Error,
    user::User,
    Platform,
};
use super::Session;

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Session")
            .field("session", &self.session)
            .field("user", &self.user)
            .finish_non_exhaustive()
    }
}

impl Session {
    pub(crate) fn new(
        platform: Platform,
        session: session::Session,
        user: User,
    ) -> Self {
        Self {
            platform,
            session,
            user,
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn session(&self) -> &session::Session {
        &self.session
    }

    /// Logout this session.
    pub async fn logout(self) -> Result<(), Error> {
        Ok(self.platform
            .ac_platform()
            .purge_session(self.session.token)
            .await?)
    }

    /// Logout every other session of the user.
    pub async fn logout_others(&self) -> Result<(), Error> {
        Ok(self.platform
            .ac_platform()
            .purge_user_sessions(
                self.user.id(),
                Some(self.session.token),
            )
            .await?)
    }
}

#[cfg(feature = "axum-login")]
mod axum_login;
