use axum::{
    Form,
    Json,
    extract::{Path, Query},
};
use http::StatusCode;
use pawcore::{
    animal::{
        Animal,
        AnimalFilterOptions,
        AnimalQuery,
        Animals,
        Sex,
    },
    comment::{
        Comment,
        Comments,
    },
    form::{
        AnimalForm,
        CommentForm,
    },
};
use serde::{Deserialize, Serialize};

use crate::{
    error::AppError,
    server::Context,
};

/// Listing filters as submitted, each a comma separated set.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AnimalListParams {
    pub location: String,
    pub color: String,
    pub sex: String,
}

fn split(value: &str) -> impl Iterator<Item = &str> {
    value.split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

impl TryFrom<&AnimalListParams> for AnimalQuery {
    type Error = AppError;

    fn try_from(params: &AnimalListParams) -> Result<Self, Self::Error> {
        Ok(AnimalQuery {
            shelter_names: split(&params.location)
                .map(String::from)
                .collect(),
            colors: split(&params.color)
                .map(String::from)
                .collect(),
            sexes: split(&params.sex)
                .map(str::parse::<Sex>)
                .collect::<Result<_, _>>()
                .map_err(|_| AppError::BadRequest)?,
        })
    }
}

/// The animal, with the comments made on it when viewed by staff.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnimalDetail {
    #[serde(flatten)]
    pub animal: Animal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<Comments>,
}

pub async fn featured(
    ctx: Context,
) -> Result<Json<Animals>, AppError> {
    Ok(Json(ctx.platform.featured_animals().await?))
}

pub async fn filter_options(
    ctx: Context,
) -> Result<Json<AnimalFilterOptions>, AppError> {
    Ok(Json(ctx.platform.animal_filter_options().await?))
}

pub async fn list(
    ctx: Context,
    Query(params): Query<AnimalListParams>,
) -> Result<Json<Animals>, AppError> {
    let query = AnimalQuery::try_from(&params)?;
    Ok(Json(ctx.platform.list_animals(&query).await?))
}

pub async fn detail(
    ctx: Context,
    Path(id): Path<i64>,
) -> Result<Json<AnimalDetail>, AppError> {
    let animal = ctx.platform.get_animal(id).await?;
    let comments = match ctx.current_actor() {
        Some(_) => Some(ctx.platform.list_animal_comments(id).await?),
        None => None,
    };
    Ok(Json(AnimalDetail { animal, comments }))
}

pub async fn create(
    ctx: Context,
    Form(form): Form<AnimalForm>,
) -> Result<(StatusCode, Json<Animal>), AppError> {
    let actor = ctx.actor()?;
    let animal = form.validate(actor.shelter_id)?;
    let id = ctx.platform.create_animal(&animal).await?;
    Ok((StatusCode::CREATED, Json(ctx.platform.get_animal(id).await?)))
}

pub async fn update(
    ctx: Context,
    Path(id): Path<i64>,
    Form(form): Form<AnimalForm>,
) -> Result<Json<Animal>, AppError> {
    ctx.actor()?;
    // an omitted shelter keeps the animal where it is
    let stored = ctx.platform.get_animal(id).await?;
    let animal = form.validate(stored.shelter_id)?;
    ctx.platform.update_animal(id, &animal).await?;
    Ok(Json(ctx.platform.get_animal(id).await?))
}

pub async fn delete(
    ctx: Context,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let actor = ctx.actor()?;
    ctx.platform.delete_animal(actor, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn comment(
    ctx: Context,
    Path(id): Path<i64>,
    Form(form): Form<CommentForm>,
) -> Result<(StatusCode, Json<Comment>), AppError> {
    let actor = ctx.actor()?;
    let comment_id = ctx.platform.add_animal_comment(Some(actor), id, &form.text).await?;
    Ok((StatusCode::CREATED, Json(ctx.platform.get_comment(comment_id).await?)))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn list_params() -> anyhow::Result<()> {
        let params: AnimalListParams = serde_urlencoded::from_str(
            "location=Springfield+Shelter,+Shelbyville&sex=F&color="
        )?;
        let query = AnimalQuery::try_from(&params)?;
        assert_eq!(query.shelter_names, ["Springfield Shelter", "Shelbyville"]);
        assert!(query.colors.is_empty());
        assert_eq!(query.sexes, [Sex::Female]);

        let params: AnimalListParams = serde_urlencoded::from_str("sex=M,X")?;
        assert_eq!(AnimalQuery::try_from(&params), Err(AppError::BadRequest));
        Ok(())
    }
}
