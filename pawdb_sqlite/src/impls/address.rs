use async_trait::async_trait;
use pawcore::{
    address::{
        Address,
        NewAddress,
        traits::AddressBackend,
    },
    error::BackendError,
};
use sqlx::{
    Row,
    sqlite::SqliteRow,
};

use crate::SqliteBackend;

fn address_from_row(row: SqliteRow) -> Result<Address, sqlx::Error> {
    Ok(Address {
        id: row.try_get("id")?,
        street1: row.try_get("street1")?,
        street2: row.try_get("street2")?,
        city: row.try_get("city")?,
        state: row.try_get("state")?,
        postal: row.try_get("postal")?,
        country: row.try_get("country")?,
    })
}

async fn add_address_sqlite(
    backend: &SqliteBackend,
    address: &NewAddress,
) -> Result<i64, BackendError> {
    let id = sqlx::query(
        r#"
INSERT INTO address (
    street1,
    street2,
    city,
    state,
    postal,
    country
)
VALUES ( ?1, ?2, ?3, ?4, ?5, ?6 )
        "#,
    )
    .bind(&address.street1)
    .bind(&address.street2)
    .bind(&address.city)
    .bind(&address.state)
    .bind(&address.postal)
    .bind(&address.country)
    .execute(&*backend.pool)
    .await?
    .last_insert_rowid();
    Ok(id)
}

async fn get_address_sqlite(
    backend: &SqliteBackend,
    id: i64,
) -> Result<Address, BackendError> {
    let result = sqlx::query(
        r#"
SELECT
    id,
    street1,
    street2,
    city,
    state,
    postal,
    country
FROM
    address
WHERE
    id = ?1
        "#,
    )
    .bind(id)
    .try_map(address_from_row)
    .fetch_one(&*backend.pool)
    .await?;
    Ok(result)
}

async fn find_address_sqlite(
    backend: &SqliteBackend,
    address: &NewAddress,
) -> Result<Option<Address>, BackendError> {
    // `IS` so that an absent second line only matches another NULL
    let result = sqlx::query(
        r#"
SELECT
    id,
    street1,
    street2,
    city,
    state,
    postal,
    country
FROM
    address
WHERE
    street1 = ?1
    AND street2 IS ?2
    AND city = ?3
    AND state = ?4
    AND postal = ?5
    AND country = ?6
ORDER BY
    id
LIMIT 1
        "#,
    )
    .bind(&address.street1)
    .bind(&address.street2)
    .bind(&address.city)
    .bind(&address.state)
    .bind(&address.postal)
    .bind(&address.country)
    .try_map(address_from_row)
    .fetch_optional(&*backend.pool)
    .await?;
    Ok(result)
}

#[async_trait]
impl AddressBackend for SqliteBackend {
    async fn add_address(
        &self,
        address: &NewAddress,
    ) -> Result<i64, BackendError> {
        add_address_sqlite(&self, address).await
    }

    async fn get_address(
        &self,
        id: i64,
    ) -> Result<Address, BackendError> {
        get_address_sqlite(&self, id).await
    }

    async fn find_address(
        &self,
        address: &NewAddress,
    ) -> Result<Option<Address>, BackendError> {
        find_address_sqlite(&self, address).await
    }
}
