use async_trait::async_trait;
use pawcore::{
    error::BackendError,
    shelter::{
        NewShelter,
        Shelter,
        Shelters,
        traits::ShelterBackend,
    },
};
use sqlx::{
    Row,
    sqlite::SqliteRow,
};

use crate::SqliteBackend;

fn shelter_from_row(row: SqliteRow) -> Result<Shelter, sqlx::Error> {
    Ok(Shelter {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        phone_number: row.try_get("phone_number")?,
        email_address: row.try_get("email_address")?,
        address_id: row.try_get("address_id")?,
    })
}

async fn add_shelter_sqlite(
    backend: &SqliteBackend,
    shelter: &NewShelter,
) -> Result<i64, BackendError> {
    let id = sqlx::query(
        r#"
INSERT INTO shelter (
    name,
    phone_number,
    email_address,
    address_id
)
VALUES ( ?1, ?2, ?3, ?4 )
        "#,
    )
    .bind(&shelter.name)
    .bind(&shelter.phone_number)
    .bind(&shelter.email_address)
    .bind(shelter.address_id)
    .execute(&*backend.pool)
    .await?
    .last_insert_rowid();
    Ok(id)
}

async fn get_shelter_sqlite(
    backend: &SqliteBackend,
    id: i64,
) -> Result<Shelter, BackendError> {
    let result = sqlx::query(
        r#"
SELECT
    id,
    name,
    phone_number,
    email_address,
    address_id
FROM
    shelter
WHERE
    id = ?1
        "#,
    )
    .bind(id)
    .try_map(shelter_from_row)
    .fetch_one(&*backend.pool)
    .await?;
    Ok(result)
}

async fn list_shelters_sqlite(
    backend: &SqliteBackend,
) -> Result<Shelters, BackendError> {
    let result = sqlx::query(
        r#"
SELECT
    id,
    name,
    phone_number,
    email_address,
    address_id
FROM
    shelter
ORDER BY
    name,
    id
        "#,
    )
    .try_map(shelter_from_row)
    .fetch_all(&*backend.pool)
    .await?;
    Ok(result.into())
}

async fn update_shelter_sqlite(
    backend: &SqliteBackend,
    id: i64,
    shelter: &NewShelter,
) -> Result<bool, BackendError> {
    let rows_affected = sqlx::query(
        r#"
UPDATE
    shelter
SET
    name = ?2,
    phone_number = ?3,
    email_address = ?4,
    address_id = ?5
WHERE
    id = ?1
        "#,
    )
    .bind(id)
    .bind(&shelter.name)
    .bind(&shelter.phone_number)
    .bind(&shelter.email_address)
    .bind(shelter.address_id)
    .execute(&*backend.pool)
    .await?
    .rows_affected();
    Ok(rows_affected > 0)
}

async fn delete_shelter_sqlite(
    backend: &SqliteBackend,
    id: i64,
) -> Result<bool, BackendError> {
    let rows_affected = sqlx::query("DELETE FROM shelter WHERE id = ?1")
        .bind(id)
        .execute(&*backend.pool)
        .await?
        .rows_affected();
    Ok(rows_affected > 0)
}

#[async_trait]
impl ShelterBackend for SqliteBackend {
    async fn add_shelter(
        &self,
        shelter: &NewShelter,
    ) -> Result<i64, BackendError> {
        add_shelter_sqlite(&self, shelter).await
    }

    async fn get_shelter(
        &self,
        id: i64,
    ) -> Result<Shelter, BackendError> {
        get_shelter_sqlite(&self, id).await
    }

    async fn list_shelters(
        &self,
    ) -> Result<Shelters, BackendError> {
        list_shelters_sqlite(&self).await
    }

    async fn update_shelter(
        &self,
        id: i64,
        shelter: &NewShelter,
    ) -> Result<bool, BackendError> {
        update_shelter_sqlite(&self, id, shelter).await
    }

    async fn delete_shelter(
        &self,
        id: i64,
    ) -> Result<bool, BackendError> {
        delete_shelter_sqlite(&self, id).await
    }
}
