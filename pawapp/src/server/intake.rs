use axum::{
    Form,
    Json,
    extract::Path,
};
use http::StatusCode;
use pawcore::{
    form::IntakeForm,
    shelter::Shelters,
};
use pawctrl::platform::IntakeOutcome;

use crate::{
    error::AppError,
    server::Context,
};

pub async fn adopt(
    ctx: Context,
    Path(id): Path<i64>,
    Form(form): Form<IntakeForm>,
) -> Result<(StatusCode, Json<IntakeOutcome>), AppError> {
    let outcome = ctx.platform.adopt(id, &form).await?;
    Ok((StatusCode::CREATED, Json(outcome)))
}

/// The shelters that may be selected on the volunteer form.
pub async fn shelters(
    ctx: Context,
) -> Result<Json<Shelters>, AppError> {
    Ok(Json(ctx.platform.list_shelters().await?))
}

pub async fn volunteer(
    ctx: Context,
    Form(form): Form<IntakeForm>,
) -> Result<(StatusCode, Json<IntakeOutcome>), AppError> {
    let outcome = ctx.platform.volunteer(&form).await?;
    Ok((StatusCode::CREATED, Json(outcome)))
}
