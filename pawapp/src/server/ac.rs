use axum::{
    Extension,
    Form,
    Json,
    extract::FromRequestParts,
};
use axum_login::{
    AuthSession,
    Error as AxumLoginError,
};
use http::{
    HeaderMap,
    StatusCode,
    request::Parts,
};
use pawac::{
    error::Error as ACError,
    axum_login::Credentials,
    Platform as ACPlatform,
};
use pawctrl::{
    actor::Actor,
    error::{
        CtrlError,
        PlatformError,
    },
    platform::Platform,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// The platform along with the identity behind the request, resolved
/// once per request from the login session and the worker record.
pub struct Context {
    pub platform: Platform,
    session: AuthSession<ACPlatform>,
    actor: Option<Actor>,
}

impl<S> FromRequestParts<S> for Context
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Extension(platform) = Extension::<Platform>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::InternalServerError)?;
        let Extension(session) = Extension::<AuthSession<ACPlatform>>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::InternalServerError)?;
        let actor = match session.user.as_ref() {
            Some(auth) => resolve_actor(&platform, auth.user().name()).await?,
            None => None,
        };
        Ok(Self { platform, session, actor })
    }
}

async fn resolve_actor(
    platform: &Platform,
    username: &str,
) -> Result<Option<Actor>, AppError> {
    match platform.get_actor(username).await {
        Ok(actor) => Ok(Some(actor)),
        // a login without a worker record carries no staff access
        Err(PlatformError::CtrlError(CtrlError::NotAWorker(_))) => {
            log::warn!("user {username:?} is logged in but is not a worker");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

impl Context {
    /// The worker behind the request, required for staff only routes.
    pub fn actor(&self) -> Result<&Actor, AppError> {
        self.actor.as_ref().ok_or(AppError::Unauthorized)
    }

    pub fn current_actor(&self) -> Option<&Actor> {
        self.actor.as_ref()
    }

    pub async fn sign_in_with_login_password(
        &mut self,
        login: String,
        password: String,
        origin: String,
    ) -> Result<Actor, AppError> {
        let creds = Credentials { login, password, origin };
        let auth = match self.session.authenticate(creds).await {
            Ok(Some(auth)) => auth,
            Ok(None) | Err(AxumLoginError::Backend(ACError::Authentication(_))) => {
                return Err(AppError::Unauthorized);
            }
            Err(e) => {
                log::error!("failed to authenticate: {e}");
                return Err(AppError::InternalServerError);
            }
        };
        let Some(actor) = resolve_actor(&self.platform, auth.user().name()).await? else {
            auth.logout().await
                .map_err(|_| AppError::InternalServerError)?;
            return Err(AppError::Forbidden);
        };
        self.session.login(&auth).await
            .map_err(|_| AppError::InternalServerError)?;
        log::info!("{} logged in", actor.username);
        self.actor = Some(actor.clone());
        Ok(actor)
    }

    pub async fn sign_out(&mut self) -> Result<(), AppError> {
        if let Some(session) = self.session.logout().await
            .map_err(|_| AppError::InternalServerError)?
        {
            session.logout().await
                .map_err(|_| AppError::InternalServerError)?;
        }
        self.actor = None;
        Ok(())
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

fn origin(headers: &HeaderMap) -> String {
    headers.get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|value| value.trim().to_string())
        .unwrap_or_else(|| "localhost".to_string())
}

pub async fn login(
    mut ctx: Context,
    headers: HeaderMap,
    Form(form): Form<LoginForm>,
) -> Result<Json<Actor>, AppError> {
    let actor = ctx.sign_in_with_login_password(
        form.username,
        form.password,
        origin(&headers),
    ).await?;
    Ok(Json(actor))
}

pub async fn logout(
    mut ctx: Context,
) -> Result<StatusCode, AppError> {
    ctx.actor()?;
    ctx.sign_out().await?;
    Ok(StatusCode::NO_CONTENT)
}
