use async_trait::async_trait;
use crate::error::BackendError;
use super::{
    session::{
        Session,
        SessionToken,
    },
    user::User,
};

#[async_trait]
pub trait UserBackend {
    async fn add_user(
        &self,
        name: &str,
    ) -> Result<i64, BackendError>;
    async fn get_user_by_id(
        &self,
        id: i64,
    ) -> Result<Option<User>, BackendError>;
    async fn get_user_by_name(
        &self,
        name: &str,
    ) -> Result<Option<User>, BackendError>;
    async fn store_user_password(
        &self,
        user_id: i64,
        password: &str,
    ) -> Result<i64, BackendError>;
    /// Returns the most recently stored password for the user.
    async fn get_user_password(
        &self,
        user_id: i64,
    ) -> Result<String, BackendError>;
    async fn purge_user_passwords(
        &self,
        user_id: i64,
    ) -> Result<(), BackendError>;
}

#[async_trait]
pub trait SessionBackend {
    /// Inserts or updates the session keyed by its token.
    async fn save_session(
        &self,
        session: &Session,
    ) -> Result<(), BackendError>;
    async fn load_session(
        &self,
        token: SessionToken,
    ) -> Result<Option<Session>, BackendError>;
    async fn purge_session(
        &self,
        token: SessionToken,
    ) -> Result<(), BackendError>;
    /// Purge all sessions for the user, other than the one to keep.
    async fn purge_user_sessions(
        &self,
        user_id: i64,
        keep_token: Option<SessionToken>,
    ) -> Result<(), BackendError>;
    async fn get_user_sessions(
        &self,
        user_id: i64,
    ) -> Result<Vec<Session>, BackendError>;
}
