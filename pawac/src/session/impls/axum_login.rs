use pawcore::ac::session::SessionToken;
use ::axum_login::AuthUser;
use super::*;

// The session stands in for the user as far as axum-login is concerned,
// so that logging out purges exactly the session being used; the token
// doubles as the auth hash as sessions are invalidated by deletion.
impl AuthUser for Session {
    type Id = SessionToken;

    fn id(&self) -> Self::Id {
        self.session.token
    }

    fn session_auth_hash(&self) -> &[u8] {
        self.session.token.as_bytes()
    }
}
