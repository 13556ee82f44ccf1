use pawcore::{
    ac::{
        session::{
            self,
            SessionFactory,
            SessionToken,
        },
        user,
    },
    platform::ACPlatform,
};
use std::sync::Arc;

use crate::{
    error::{
        AuthenticationError,
        Error,
        PasswordError,
    },
    password::{
        Password,
        PasswordStatus,
    },
    session::Session,
    user::User,
};

use super::*;

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ac_platform(mut self, val: impl ACPlatform + 'static) -> Self {
        self.ac_platform = Some(Box::new(val));
        self
    }

    pub fn password_autopurge(mut self, val: bool) -> Self {
        self.password_autopurge = val;
        self
    }

    pub fn session_factory(mut self, val: SessionFactory) -> Self {
        self.session_factory = val;
        self
    }

    pub fn build(self) -> Platform {
        Platform(Arc::new(PlatformInner {
            ac_platform: self.ac_platform
                .expect("missing required argument ac_platform"),
            password_autopurge: self.password_autopurge,
            session_factory: self.session_factory,
        }))
    }
}

impl Platform {
    pub(crate) fn ac_platform(&self) -> &dyn ACPlatform {
        self.0.ac_platform.as_ref()
    }

    async fn stored_password(&self, id: i64) -> Result<String, Error> {
        match self.0.ac_platform.get_user_password(id).await {
            Ok(password) => Ok(password),
            Err(e) if e.is_not_found() => Ok(String::new()),
            Err(e) => Err(e)?,
        }
    }
}

// User management.
impl Platform {
    /// Create a user with a new password, which must be set before the
    /// user may login.
    pub async fn create_user(
        &self,
        name: &str,
    ) -> Result<User, Error> {
        let id = self.0.ac_platform.add_user(name).await?;
        self.force_user_id_password(id, Password::New).await?;
        log::info!("created user {name:?} with id {id}");
        self.get_user(id).await?
            .ok_or(AuthenticationError::UnknownUser.into())
    }

    pub async fn get_user(
        &self,
        id: i64,
    ) -> Result<Option<User>, Error> {
        Ok(self.0.ac_platform.get_user_by_id(id).await?
            .map(|user| User::new(self.clone(), user)))
    }

    pub async fn find_user(
        &self,
        name: &str,
    ) -> Result<Option<User>, Error> {
        Ok(self.0.ac_platform.get_user_by_name(name).await?
            .map(|user| User::new(self.clone(), user)))
    }

    pub async fn authenticate_user(
        &self,
        login: &str,
        password: &str,
    ) -> Result<User, Error> {
        let user = self.0.ac_platform.get_user_by_name(login).await?
            .ok_or(AuthenticationError::UnknownUser)?;
        self.verify_user_id_password(user.id, password).await?;
        Ok(User::new(self.clone(), user))
    }

    pub async fn login_status(
        &self,
        login: &str,
    ) -> Result<(user::User, PasswordStatus), Error> {
        let user = self.0.ac_platform.get_user_by_name(login).await?
            .ok_or(AuthenticationError::UnknownUser)?;
        let stored = self.stored_password(user.id).await?;
        let status = PasswordStatus::from(Password::from_database(&stored));
        Ok((user, status))
    }
}

// Password management

impl Platform {
    /// Set the password for the user with the id, but only if the stored
    /// password is currently `New` or `Reset`.
    pub async fn new_user_id_password(
        &self,
        id: i64,
        password: &str,
    ) -> Result<(), Error> {
        let stored = self.stored_password(id).await?;
        match Password::from_database(&stored) {
            Password::New | Password::Reset =>
                self.force_user_id_password(id, Password::new(password)).await,
            Password::Hash(_) => Err(PasswordError::Existing)?,
            Password::Restricted => Err(AuthenticationError::Restricted)?,
            _ => Err(Error::Misconfiguration),
        }
    }

    /// Verify the raw password against the stored hash for the user.
    pub async fn verify_user_id_password(
        &self,
        id: i64,
        password: &str,
    ) -> Result<(), Error> {
        let stored = self.stored_password(id).await?;
        match Password::from_database(&stored) {
            Password::Restricted => Err(AuthenticationError::Restricted)?,
            stored => Ok(stored.verify(&Password::new(password))
                .map_err(AuthenticationError::from)?),
        }
    }

    /// Unconditionally set the password for the user with the id.
    pub async fn force_user_id_password(
        &self,
        id: i64,
        password: Password<'_>,
    ) -> Result<(), Error> {
        let password_hash = password.to_database()?;
        if self.0.password_autopurge {
            self.0.ac_platform.purge_user_passwords(id).await?;
        }
        self.0.ac_platform.store_user_password(id, &password_hash).await?;
        Ok(())
    }
}

// Session management

impl Platform {
    pub async fn new_user_session(
        &self,
        user: User,
        origin: String,
    ) -> Result<Session, Error> {
        let session = self.0.session_factory.create(user.id(), origin);
        self.0.ac_platform.save_session(&session).await?;
        log::trace!("new session for user {} from {}", user.id(), session.origin);
        Ok(Session::new(self.clone(), session, user))
    }

    pub async fn load_session(
        &self,
        token: SessionToken,
    ) -> Result<Session, Error> {
        let session = self.0.ac_platform.load_session(token).await?
            .ok_or(AuthenticationError::UnknownSession)?;
        let user = self.get_user(session.user_id).await?
            .ok_or(AuthenticationError::UnknownUser)?;
        Ok(Session::new(self.clone(), session, user))
    }

    /// The sessions of the user.
    pub async fn get_user_sessions(
        &self,
        user_id: i64,
    ) -> Result<Vec<session::Session>, Error> {
        Ok(self.0.ac_platform.get_user_sessions(user_id).await?)
    }

    /// Logout every session of the user.
    pub async fn logout_user(
        &self,
        user_id: i64,
    ) -> Result<(), Error> {
        Ok(self.0.ac_platform.purge_user_sessions(user_id, None).await?)
    }
}

// Login methods

impl Platform {
    pub async fn authenticate_user_login(
        &self,
        login: &str,
        password: &str,
        origin: String,
    ) -> Result<Session, Error> {
        let user = self.authenticate_user(login, password).await?;
        self.new_user_session(user, origin).await
    }
}
