use axum::{
    Form,
    Json,
    extract::{Path, Query},
};
use http::StatusCode;
use pawcore::{
    comment::Comment,
    form::{
        CommentForm,
        TaskEditForm,
        TaskForm,
        TaskItemForm,
    },
    task::{
        Task,
        TaskItem,
        TaskItems,
        TaskQuery,
    },
};
use pawctrl::platform::{
    Dashboard,
    TaskDetail,
};

use crate::{
    error::AppError,
    server::Context,
};

pub async fn dashboard(
    ctx: Context,
    Query(query): Query<TaskQuery>,
) -> Result<Json<Dashboard>, AppError> {
    ctx.actor()?;
    Ok(Json(ctx.platform.dashboard(&query).await?))
}

/// Both the filter and the sort forms submit the complete query.
pub async fn filter(
    ctx: Context,
    Form(query): Form<TaskQuery>,
) -> Result<Json<Dashboard>, AppError> {
    ctx.actor()?;
    Ok(Json(ctx.platform.dashboard(&query).await?))
}

pub async fn create(
    ctx: Context,
    Form(form): Form<TaskForm>,
) -> Result<(StatusCode, Json<Task>), AppError> {
    let actor = ctx.actor()?;
    let task = form.validate(actor.shelter_id)?;
    let id = ctx.platform.add_task(&task).await?;
    Ok((StatusCode::CREATED, Json(ctx.platform.get_task(id).await?)))
}

pub async fn detail(
    ctx: Context,
    Path(id): Path<i64>,
) -> Result<Json<TaskDetail>, AppError> {
    ctx.actor()?;
    Ok(Json(ctx.platform.get_task_detail(id).await?))
}

pub async fn update(
    ctx: Context,
    Path(id): Path<i64>,
    Form(form): Form<TaskEditForm>,
) -> Result<Json<TaskDetail>, AppError> {
    ctx.actor()?;
    let update = form.validate()?;
    ctx.platform.update_task(id, &update).await?;
    Ok(Json(ctx.platform.get_task_detail(id).await?))
}

pub async fn delete(
    ctx: Context,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let actor = ctx.actor()?;
    ctx.platform.delete_task(actor, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn complete(
    ctx: Context,
    Path(id): Path<i64>,
) -> Result<Json<Task>, AppError> {
    let actor = ctx.actor()?;
    Ok(Json(ctx.platform.complete_task(actor, id).await?))
}

pub async fn reopen(
    ctx: Context,
    Path(id): Path<i64>,
) -> Result<Json<Task>, AppError> {
    ctx.actor()?;
    Ok(Json(ctx.platform.reopen_task(id).await?))
}

pub async fn comment(
    ctx: Context,
    Path(id): Path<i64>,
    Form(form): Form<CommentForm>,
) -> Result<(StatusCode, Json<Comment>), AppError> {
    let actor = ctx.actor()?;
    let comment_id = ctx.platform.add_task_comment(Some(actor), id, &form.text).await?;
    Ok((StatusCode::CREATED, Json(ctx.platform.get_comment(comment_id).await?)))
}

pub async fn add_item(
    ctx: Context,
    Path(id): Path<i64>,
    Form(form): Form<TaskItemForm>,
) -> Result<(StatusCode, Json<TaskItems>), AppError> {
    ctx.actor()?;
    let title = form.validate()?;
    ctx.platform.add_task_item(id, &title).await?;
    Ok((StatusCode::CREATED, Json(ctx.platform.list_task_items(id).await?)))
}

pub async fn toggle_item(
    ctx: Context,
    Path((id, item_id)): Path<(i64, i64)>,
) -> Result<Json<TaskItem>, AppError> {
    ctx.actor()?;
    Ok(Json(ctx.platform.toggle_task_item(id, item_id).await?))
}
