use async_trait::async_trait;
use pawcore::{
    error::BackendError,
    person::{
        Adopter,
        NewPerson,
        Person,
        PersonKind,
        Persons,
        PersonType,
        Volunteer,
        Worker,
        traits::PersonBackend,
    },
};
use sqlx::{
    Row,
    sqlite::SqliteRow,
};

use crate::SqliteBackend;

const SELECT_PERSON: &str = r#"
SELECT
    person.id,
    person.kind,
    person.name,
    person.phone_number,
    person.email,
    person.address_id,
    worker.person_id AS worker_id,
    worker.username AS worker_username,
    worker.role AS worker_role,
    worker.hire_ts AS worker_hire_ts,
    worker.shelter_id AS worker_shelter_id,
    adopter.person_id AS adopter_id,
    adopter.can_adopt AS adopter_can_adopt,
    volunteer.person_id AS volunteer_id,
    volunteer.start_ts AS volunteer_start_ts,
    volunteer.shelter_id AS volunteer_shelter_id
FROM
    person
LEFT JOIN worker ON worker.person_id = person.id
LEFT JOIN adopter ON adopter.person_id = person.id
LEFT JOIN volunteer ON volunteer.person_id = person.id
"#;

/// Resolve the kind of the person through the joined subtype columns;
/// the subtype row must be present for the recorded kind.
fn person_from_row(row: &SqliteRow) -> Result<Person, BackendError> {
    let id: i64 = row.try_get("id")?;
    let kind: String = row.try_get("kind")?;
    let missing = || BackendError::AppInvariantViolation(format!(
        "person {id} is recorded as {kind} but has no {kind} record"
    ));
    let kind = match kind.parse::<PersonType>() {
        Ok(PersonType::Worker) => {
            row.try_get::<Option<i64>, _>("worker_id")?
                .ok_or_else(missing)?;
            let role: String = row.try_get("worker_role")?;
            PersonKind::Worker(Worker {
                username: row.try_get("worker_username")?,
                role: role.parse()
                    .map_err(|_| BackendError::AppInvariantViolation(format!(
                        "worker {id} has an unknown role {role}"
                    )))?,
                hire_ts: row.try_get("worker_hire_ts")?,
                shelter_id: row.try_get("worker_shelter_id")?,
            })
        }
        Ok(PersonType::Adopter) => {
            row.try_get::<Option<i64>, _>("adopter_id")?
                .ok_or_else(missing)?;
            PersonKind::Adopter(Adopter {
                can_adopt: row.try_get("adopter_can_adopt")?,
            })
        }
        Ok(PersonType::Volunteer) => {
            row.try_get::<Option<i64>, _>("volunteer_id")?
                .ok_or_else(missing)?;
            PersonKind::Volunteer(Volunteer {
                start_ts: row.try_get("volunteer_start_ts")?,
                shelter_id: row.try_get("volunteer_shelter_id")?,
            })
        }
        Err(_) => return Err(BackendError::AppInvariantViolation(format!(
            "person {id} is of an unknown kind {kind}"
        ))),
    };
    Ok(Person {
        id,
        name: row.try_get("name")?,
        phone_number: row.try_get("phone_number")?,
        email: row.try_get("email")?,
        address_id: row.try_get("address_id")?,
        kind,
    })
}

async fn add_person_sqlite(
    backend: &SqliteBackend,
    person: &NewPerson,
) -> Result<i64, BackendError> {
    let mut tx = backend.pool.begin().await?;
    let id = sqlx::query(
        r#"
INSERT INTO person (
    kind,
    name,
    phone_number,
    email,
    address_id
)
VALUES ( ?1, ?2, ?3, ?4, ?5 )
        "#,
    )
    .bind(person.kind.person_type().as_str())
    .bind(&person.name)
    .bind(&person.phone_number)
    .bind(&person.email)
    .bind(person.address_id)
    .execute(&mut *tx)
    .await?
    .last_insert_rowid();

    match &person.kind {
        PersonKind::Worker(worker) => {
            sqlx::query(
                r#"
INSERT INTO worker (
    person_id,
    username,
    role,
    hire_ts,
    shelter_id
)
VALUES ( ?1, ?2, ?3, ?4, ?5 )
                "#,
            )
            .bind(id)
            .bind(&worker.username)
            .bind(worker.role.code())
            .bind(worker.hire_ts)
            .bind(worker.shelter_id)
            .execute(&mut *tx)
            .await?;
        }
        PersonKind::Adopter(adopter) => {
            sqlx::query(
                r#"
INSERT INTO adopter (
    person_id,
    can_adopt
)
VALUES ( ?1, ?2 )
                "#,
            )
            .bind(id)
            .bind(adopter.can_adopt)
            .execute(&mut *tx)
            .await?;
        }
        PersonKind::Volunteer(volunteer) => {
            sqlx::query(
                r#"
INSERT INTO volunteer (
    person_id,
    start_ts,
    shelter_id
)
VALUES ( ?1, ?2, ?3 )
                "#,
            )
            .bind(id)
            .bind(volunteer.start_ts)
            .bind(volunteer.shelter_id)
            .execute(&mut *tx)
            .await?;
        }
    }

    tx.commit().await?;
    Ok(id)
}

async fn get_person_sqlite(
    backend: &SqliteBackend,
    id: i64,
) -> Result<Person, BackendError> {
    let row = sqlx::query(&format!("{SELECT_PERSON} WHERE person.id = ?1"))
        .bind(id)
        .fetch_one(&*backend.pool)
        .await?;
    person_from_row(&row)
}

async fn find_person_by_email_sqlite(
    backend: &SqliteBackend,
    email: &str,
) -> Result<Option<Person>, BackendError> {
    sqlx::query(&format!(
        "{SELECT_PERSON} WHERE person.email = ?1 ORDER BY person.id LIMIT 1"
    ))
        .bind(email)
        .fetch_optional(&*backend.pool)
        .await?
        .as_ref()
        .map(person_from_row)
        .transpose()
}

async fn get_worker_by_username_sqlite(
    backend: &SqliteBackend,
    username: &str,
) -> Result<Option<Person>, BackendError> {
    sqlx::query(&format!("{SELECT_PERSON} WHERE worker.username = ?1"))
        .bind(username)
        .fetch_optional(&*backend.pool)
        .await?
        .as_ref()
        .map(person_from_row)
        .transpose()
}

async fn list_persons_sqlite(
    backend: &SqliteBackend,
    person_type: Option<PersonType>,
) -> Result<Persons, BackendError> {
    Ok(sqlx::query(&format!(
        "{SELECT_PERSON} WHERE (?1 IS NULL OR person.kind = ?1) ORDER BY person.id"
    ))
        .bind(person_type.map(|t| t.as_str()))
        .fetch_all(&*backend.pool)
        .await?
        .iter()
        .map(person_from_row)
        .collect::<Result<Vec<_>, _>>()?
        .into())
}

async fn delete_person_sqlite(
    backend: &SqliteBackend,
    id: i64,
) -> Result<bool, BackendError> {
    let rows_affected = sqlx::query("DELETE FROM person WHERE id = ?1")
        .bind(id)
        .execute(&*backend.pool)
        .await?
        .rows_affected();
    Ok(rows_affected > 0)
}

#[async_trait]
impl PersonBackend for SqliteBackend {
    async fn add_person(
        &self,
        person: &NewPerson,
    ) -> Result<i64, BackendError> {
        add_person_sqlite(&self, person).await
    }

    async fn get_person(
        &self,
        id: i64,
    ) -> Result<Person, BackendError> {
        get_person_sqlite(&self, id).await
    }

    async fn find_person_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Person>, BackendError> {
        find_person_by_email_sqlite(&self, email).await
    }

    async fn get_worker_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Person>, BackendError> {
        get_worker_by_username_sqlite(&self, username).await
    }

    async fn list_persons(
        &self,
        person_type: Option<PersonType>,
    ) -> Result<Persons, BackendError> {
        list_persons_sqlite(&self, person_type).await
    }

    async fn delete_person(
        &self,
        id: i64,
    ) -> Result<bool, BackendError> {
        delete_person_sqlite(&self, id).await
    }
}
