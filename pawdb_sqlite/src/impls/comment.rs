use async_trait::async_trait;
use pawcore::{
    comment::{
        Comment,
        Comments,
        CommentTarget,
        NewComment,
        traits::CommentBackend,
    },
    error::BackendError,
};
use sqlx::{
    Row,
    sqlite::SqliteRow,
};

use crate::{
    SqliteBackend,
    chrono::Utc,
};

const SELECT_COMMENT: &str = r#"
SELECT
    comment.id,
    comment.kind,
    comment.person_id,
    comment.text,
    comment.created_ts,
    task_comment.task_id,
    animal_comment.animal_id
FROM
    comment
LEFT JOIN task_comment ON task_comment.comment_id = comment.id
LEFT JOIN animal_comment ON animal_comment.comment_id = comment.id
"#;

fn comment_from_row(row: &SqliteRow) -> Result<Comment, BackendError> {
    let id: i64 = row.try_get("id")?;
    let kind: String = row.try_get("kind")?;
    let target = match kind.as_str() {
        "task" => row.try_get::<Option<i64>, _>("task_id")?
            .map(CommentTarget::Task),
        "animal" => row.try_get::<Option<i64>, _>("animal_id")?
            .map(CommentTarget::Animal),
        _ => None,
    }
        .ok_or_else(|| BackendError::AppInvariantViolation(format!(
            "comment {id} of kind {kind} has no matching target"
        )))?;
    Ok(Comment {
        id,
        person_id: row.try_get("person_id")?,
        text: row.try_get("text")?,
        created_ts: row.try_get("created_ts")?,
        target,
    })
}

async fn add_comment_sqlite(
    backend: &SqliteBackend,
    comment: &NewComment,
) -> Result<i64, BackendError> {
    let ts = Utc::now().timestamp();
    let mut tx = backend.pool.begin().await?;
    let id = sqlx::query(
        r#"
INSERT INTO comment (
    kind,
    person_id,
    text,
    created_ts
)
VALUES ( ?1, ?2, ?3, ?4 )
        "#,
    )
    .bind(comment.target.kind())
    .bind(comment.person_id)
    .bind(&comment.text)
    .bind(ts)
    .execute(&mut *tx)
    .await?
    .last_insert_rowid();

    let statement = match comment.target {
        CommentTarget::Task(_) =>
            "INSERT INTO task_comment (comment_id, task_id) VALUES ( ?1, ?2 )",
        CommentTarget::Animal(_) =>
            "INSERT INTO animal_comment (comment_id, animal_id) VALUES ( ?1, ?2 )",
    };
    sqlx::query(statement)
        .bind(id)
        .bind(comment.target.id())
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(id)
}

async fn get_comment_sqlite(
    backend: &SqliteBackend,
    id: i64,
) -> Result<Comment, BackendError> {
    let row = sqlx::query(&format!("{SELECT_COMMENT} WHERE comment.id = ?1"))
        .bind(id)
        .fetch_one(&*backend.pool)
        .await?;
    comment_from_row(&row)
}

async fn list_comments_sqlite(
    backend: &SqliteBackend,
    target: CommentTarget,
) -> Result<Comments, BackendError> {
    let condition = match target {
        CommentTarget::Task(_) => "task_comment.task_id = ?1",
        CommentTarget::Animal(_) => "animal_comment.animal_id = ?1",
    };
    Ok(sqlx::query(&format!(
        "{SELECT_COMMENT} WHERE {condition} ORDER BY comment.created_ts, comment.id"
    ))
        .bind(target.id())
        .fetch_all(&*backend.pool)
        .await?
        .iter()
        .map(comment_from_row)
        .collect::<Result<Vec<_>, _>>()?
        .into())
}

#[async_trait]
impl CommentBackend for SqliteBackend {
    async fn add_comment(
        &self,
        comment: &NewComment,
    ) -> Result<i64, BackendError> {
        add_comment_sqlite(&self, comment).await
    }

    async fn get_comment(
        &self,
        id: i64,
    ) -> Result<Comment, BackendError> {
        get_comment_sqlite(&self, id).await
    }

    async fn list_comments(
        &self,
        target: CommentTarget,
    ) -> Result<Comments, BackendError> {
        list_comments_sqlite(&self, target).await
    }
}
