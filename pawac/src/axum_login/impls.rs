use crate::{
    error::{
        AuthenticationError,
        Error,
    },
    platform::Platform,
    session::Session,
};
use super::*;

use ::axum_login::{
    AuthnBackend,
    UserId,
};

#[async_trait::async_trait]
impl AuthnBackend for Platform {
    type User = Session;
    type Credentials = Credentials;
    type Error = Error;

    async fn authenticate(
        &self,
        credentials: Self::Credentials,
    ) -> Result<Option<Self::User>, Self::Error> {
        let session = self.authenticate_user_login(
            &credentials.login,
            &credentials.password,
            credentials.origin,
        ).await?;
        Ok(Some(session))
    }

    async fn get_user(
        &self,
        session_token: &UserId<Self>,
    ) -> Result<Option<Self::User>, Self::Error> {
        match self.load_session(*session_token).await {
            Ok(session) => Ok(Some(session)),
            // a purged session simply no longer authenticates
            Err(Error::Authentication(AuthenticationError::UnknownSession)) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
