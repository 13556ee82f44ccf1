use async_trait::async_trait;
use pawcore::{
    ac::{
        session::{
            Session,
            SessionToken,
        },
        traits::SessionBackend,
    },
    error::BackendError,
};
use sqlx::{
    Row,
    sqlite::SqliteRow,
};

use crate::SqliteBackend;

fn session_from_row(row: SqliteRow) -> Result<Session, sqlx::Error> {
    let token: String = row.try_get("token")?;
    Ok(Session {
        token: token.parse()
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?,
        user_id: row.try_get("user_id")?,
        origin: row.try_get("origin")?,
        created_ts: row.try_get("created_ts")?,
        last_active_ts: row.try_get("last_active_ts")?,
    })
}

async fn save_session_sqlite(
    backend: &SqliteBackend,
    session: &Session,
) -> Result<(), BackendError> {
    sqlx::query(
        r#"
INSERT INTO user_session (
    token,
    user_id,
    origin,
    created_ts,
    last_active_ts
)
VALUES ( ?1, ?2, ?3, ?4, ?5 )
ON CONFLICT(token)
DO UPDATE SET
    origin = excluded.origin,
    last_active_ts = excluded.last_active_ts
        "#,
    )
    .bind(session.token.to_string())
    .bind(session.user_id)
    .bind(&session.origin)
    .bind(session.created_ts)
    .bind(session.last_active_ts)
    .execute(&*backend.pool)
    .await?;
    Ok(())
}

async fn load_session_sqlite(
    backend: &SqliteBackend,
    token: SessionToken,
) -> Result<Option<Session>, BackendError> {
    let result = sqlx::query(
        r#"
SELECT
    token,
    user_id,
    origin,
    created_ts,
    last_active_ts
FROM
    user_session
WHERE
    token = ?1
        "#,
    )
    .bind(token.to_string())
    .try_map(session_from_row)
    .fetch_optional(&*backend.pool)
    .await?;
    Ok(result)
}

async fn purge_session_sqlite(
    backend: &SqliteBackend,
    token: SessionToken,
) -> Result<(), BackendError> {
    sqlx::query(
        r#"
DELETE FROM
    user_session
WHERE
    token = ?1
        "#,
    )
    .bind(token.to_string())
    .execute(&*backend.pool)
    .await?;
    Ok(())
}

async fn purge_user_sessions_sqlite(
    backend: &SqliteBackend,
    user_id: i64,
    keep_token: Option<SessionToken>,
) -> Result<(), BackendError> {
    sqlx::query(
        r#"
DELETE FROM
    user_session
WHERE
    user_id = ?1
    AND (?2 IS NULL OR token != ?2)
        "#,
    )
    .bind(user_id)
    .bind(keep_token.map(|token| token.to_string()))
    .execute(&*backend.pool)
    .await?;
    Ok(())
}

async fn get_user_sessions_sqlite(
    backend: &SqliteBackend,
    user_id: i64,
) -> Result<Vec<Session>, BackendError> {
    let result = sqlx::query(
        r#"
SELECT
    token,
    user_id,
    origin,
    created_ts,
    last_active_ts
FROM
    user_session
WHERE
    user_id = ?1
ORDER BY
    last_active_ts DESC
        "#,
    )
    .bind(user_id)
    .try_map(session_from_row)
    .fetch_all(&*backend.pool)
    .await?;
    Ok(result)
}

#[async_trait]
impl SessionBackend for SqliteBackend {
    async fn save_session(
        &self,
        session: &Session,
    ) -> Result<(), BackendError> {
        save_session_sqlite(&self, session).await
    }

    async fn load_session(
        &self,
        token: SessionToken,
    ) -> Result<Option<Session>, BackendError> {
        load_session_sqlite(&self, token).await
    }

    async fn purge_session(
        &self,
        token: SessionToken,
    ) -> Result<(), BackendError> {
        purge_session_sqlite(&self, token).await
    }

    async fn purge_user_sessions(
        &self,
        user_id: i64,
        keep_token: Option<SessionToken>,
    ) -> Result<(), BackendError> {
        purge_user_sessions_sqlite(&self, user_id, keep_token).await
    }

    async fn get_user_sessions(
        &self,
        user_id: i64,
    ) -> Result<Vec<Session>, BackendError> {
        get_user_sessions_sqlite(&self, user_id).await
    }
}
