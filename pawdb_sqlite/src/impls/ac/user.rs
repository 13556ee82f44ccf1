use async_trait::async_trait;
use pawcore::{
    ac::{
        traits::UserBackend,
        user::User,
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

fn user_from_row(row: SqliteRow) -> Result<User, sqlx::Error> {
    Ok(User {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        created_ts: row.try_get("created_ts")?,
    })
}

async fn add_user_sqlite(
    backend: &SqliteBackend,
    name: &str,
) -> Result<i64, BackendError> {
    let ts = Utc::now().timestamp();
    let id = sqlx::query(
        r#"
INSERT INTO 'user' (
    name,
    created_ts
)
VALUES ( ?1, ?2 )
        "#,
    )
    .bind(name)
    .bind(ts)
    .execute(&*backend.pool)
    .await?
    .last_insert_rowid();
    Ok(id)
}

async fn get_user_by_id_sqlite(
    backend: &SqliteBackend,
    id: i64,
) -> Result<Option<User>, BackendError> {
    let recs = sqlx::query(r#"
SELECT
    id,
    name,
    created_ts
FROM
    'user'
WHERE
    id = ?1
        "#,
    )
    .bind(id)
    .try_map(user_from_row)
    .fetch_optional(&*backend.pool)
    .await?;
    Ok(recs)
}

async fn get_user_by_name_sqlite(
    backend: &SqliteBackend,
    name: &str,
) -> Result<Option<User>, BackendError> {
    let recs = sqlx::query(r#"
SELECT
    id,
    name,
    created_ts
FROM
    'user'
WHERE
    name = ?1
        "#,
    )
    .bind(name)
    .try_map(user_from_row)
    .fetch_optional(&*backend.pool)
    .await?;
    Ok(recs)
}

async fn store_user_password_sqlite(
    backend: &SqliteBackend,
    user_id: i64,
    password: &str,
) -> Result<i64, BackendError> {
    let ts = Utc::now().timestamp();
    let id = sqlx::query(
        r#"
INSERT INTO user_password (
    user_id,
    password,
    created_ts
)
VALUES ( ?1, ?2, ?3 )
        "#,
    )
    .bind(user_id)
    .bind(password)
    .bind(ts)
    .execute(&*backend.pool)
    .await?
    .last_insert_rowid();
    Ok(id)
}

async fn get_user_password_sqlite(
    backend: &SqliteBackend,
    user_id: i64,
) -> Result<String, BackendError> {
    let result = sqlx::query(
        r#"
SELECT
    password
FROM
    user_password
WHERE
    user_id = ?1
ORDER BY id DESC
        "#,
    )
    .bind(user_id)
    .try_map(|row: SqliteRow| row.try_get::<String, _>("password"))
    .fetch_one(&*backend.pool)
    .await?;
    Ok(result)
}

async fn purge_user_passwords_sqlite(
    backend: &SqliteBackend,
    user_id: i64,
) -> Result<(), BackendError> {
    sqlx::query(
        r#"
DELETE FROM
    user_password
WHERE
    user_id = ?1
        "#,
    )
    .bind(user_id)
    .execute(&*backend.pool)
    .await?;
    Ok(())
}

#[async_trait]
impl UserBackend for SqliteBackend {
    async fn add_user(
        &self,
        name: &str,
    ) -> Result<i64, BackendError> {
        add_user_sqlite(
            &self,
            name,
        ).await
    }

    async fn get_user_by_id(
        &self,
        id: i64,
    ) -> Result<Option<User>, BackendError> {
        get_user_by_id_sqlite(
            &self,
            id,
        ).await
    }

    async fn get_user_by_name(
        &self,
        name: &str,
    ) -> Result<Option<User>, BackendError> {
        get_user_by_name_sqlite(
            &self,
            name,
        ).await
    }

    async fn store_user_password(
        &self,
        user_id: i64,
        password: &str,
    ) -> Result<i64, BackendError> {
        store_user_password_sqlite(
            &self,
            user_id,
            password,
        ).await
    }

    async fn get_user_password(
        &self,
        user_id: i64,
    ) -> Result<String, BackendError> {
        get_user_password_sqlite(
            &self,
            user_id,
        ).await
    }

    async fn purge_user_passwords(
        &self,
        user_id: i64,
    ) -> Result<(), BackendError> {
        purge_user_passwords_sqlite(
            &self,
            user_id,
        ).await
    }
}
