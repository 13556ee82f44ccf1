use async_trait::async_trait;
use pawcore::{
    animal::{
        Animal,
        AnimalFilterOptions,
        AnimalKind,
        AnimalQuery,
        Animals,
        Cat,
        Dog,
        NewAnimal,
        Sex,
        Species,
        Turtle,
        traits::AnimalBackend,
    },
    error::BackendError,
    task::NewTask,
};
use sqlx::{
    QueryBuilder,
    Row,
    Sqlite,
    SqliteConnection,
    sqlite::SqliteRow,
};

use crate::{
    SqliteBackend,
    chrono::Utc,
    impls::task::insert_task,
};

const SELECT_ANIMAL: &str = r#"
SELECT
    animal.id,
    animal.kind,
    animal.name,
    animal.color,
    animal.intake_type,
    animal.intake_ts,
    animal.image,
    animal.age,
    animal.description,
    animal.sex,
    animal.ready_to_adopt,
    animal.shelter_id,
    dog.animal_id AS dog_id,
    dog.breed AS dog_breed,
    dog.is_fixed AS dog_is_fixed,
    cat.animal_id AS cat_id,
    cat.breed AS cat_breed,
    cat.is_fixed AS cat_is_fixed,
    turtle.animal_id AS turtle_id,
    turtle.species AS turtle_species
FROM
    animal
JOIN shelter ON shelter.id = animal.shelter_id
LEFT JOIN dog ON dog.animal_id = animal.id
LEFT JOIN cat ON cat.animal_id = animal.id
LEFT JOIN turtle ON turtle.animal_id = animal.id
"#;

fn parse_code<T: std::str::FromStr>(
    id: i64,
    column: &str,
    value: Option<String>,
) -> Result<Option<T>, BackendError> {
    value
        .filter(|s| !s.is_empty())
        .map(|s| s.parse().map_err(|_| BackendError::AppInvariantViolation(format!(
            "animal {id} has an unknown {column} {s}"
        ))))
        .transpose()
}

/// As with persons, a species other than the base animal must have the
/// matching row.
fn animal_from_row(row: &SqliteRow) -> Result<Animal, BackendError> {
    let id: i64 = row.try_get("id")?;
    let kind: String = row.try_get("kind")?;
    let missing = || BackendError::AppInvariantViolation(format!(
        "animal {id} is recorded as {kind} but has no {kind} record"
    ));
    let kind = match kind.parse::<Species>() {
        Ok(Species::Animal) => AnimalKind::Animal,
        Ok(Species::Dog) => {
            row.try_get::<Option<i64>, _>("dog_id")?
                .ok_or_else(missing)?;
            AnimalKind::Dog(Dog {
                breed: row.try_get("dog_breed")?,
                is_fixed: row.try_get("dog_is_fixed")?,
            })
        }
        Ok(Species::Cat) => {
            row.try_get::<Option<i64>, _>("cat_id")?
                .ok_or_else(missing)?;
            AnimalKind::Cat(Cat {
                breed: row.try_get("cat_breed")?,
                is_fixed: row.try_get("cat_is_fixed")?,
            })
        }
        Ok(Species::Turtle) => {
            row.try_get::<Option<i64>, _>("turtle_id")?
                .ok_or_else(missing)?;
            AnimalKind::Turtle(Turtle {
                species: row.try_get("turtle_species")?,
            })
        }
        Err(_) => return Err(BackendError::AppInvariantViolation(format!(
            "animal {id} is of an unknown kind {kind}"
        ))),
    };
    Ok(Animal {
        id,
        name: row.try_get("name")?,
        color: row.try_get("color")?,
        intake_type: parse_code(id, "intake_type", row.try_get("intake_type")?)?,
        intake_ts: row.try_get("intake_ts")?,
        image: row.try_get("image")?,
        age: row.try_get("age")?,
        description: row.try_get("description")?,
        sex: parse_code(id, "sex", row.try_get("sex")?)?,
        ready_to_adopt: row.try_get("ready_to_adopt")?,
        shelter_id: row.try_get("shelter_id")?,
        kind,
    })
}

fn animals_from_rows(rows: Vec<SqliteRow>) -> Result<Animals, BackendError> {
    Ok(rows.iter()
        .map(animal_from_row)
        .collect::<Result<Vec<_>, _>>()?
        .into())
}

async fn insert_kind(
    conn: &mut SqliteConnection,
    id: i64,
    kind: &AnimalKind,
) -> Result<(), BackendError> {
    match kind {
        AnimalKind::Animal => (),
        AnimalKind::Dog(Dog { breed, is_fixed }) => {
            sqlx::query("INSERT INTO dog (animal_id, breed, is_fixed) VALUES ( ?1, ?2, ?3 )")
                .bind(id)
                .bind(breed)
                .bind(is_fixed)
                .execute(&mut *conn)
                .await?;
        }
        AnimalKind::Cat(Cat { breed, is_fixed }) => {
            sqlx::query("INSERT INTO cat (animal_id, breed, is_fixed) VALUES ( ?1, ?2, ?3 )")
                .bind(id)
                .bind(breed)
                .bind(is_fixed)
                .execute(&mut *conn)
                .await?;
        }
        AnimalKind::Turtle(Turtle { species }) => {
            sqlx::query("INSERT INTO turtle (animal_id, species) VALUES ( ?1, ?2 )")
                .bind(id)
                .bind(species)
                .execute(&mut *conn)
                .await?;
        }
    }
    Ok(())
}

async fn update_kind(
    conn: &mut SqliteConnection,
    id: i64,
    kind: &AnimalKind,
) -> Result<(), BackendError> {
    match kind {
        AnimalKind::Animal => (),
        AnimalKind::Dog(Dog { breed, is_fixed }) => {
            sqlx::query("UPDATE dog SET breed = ?2, is_fixed = ?3 WHERE animal_id = ?1")
                .bind(id)
                .bind(breed)
                .bind(is_fixed)
                .execute(&mut *conn)
                .await?;
        }
        AnimalKind::Cat(Cat { breed, is_fixed }) => {
            sqlx::query("UPDATE cat SET breed = ?2, is_fixed = ?3 WHERE animal_id = ?1")
                .bind(id)
                .bind(breed)
                .bind(is_fixed)
                .execute(&mut *conn)
                .await?;
        }
        AnimalKind::Turtle(Turtle { species }) => {
            sqlx::query("UPDATE turtle SET species = ?2 WHERE animal_id = ?1")
                .bind(id)
                .bind(species)
                .execute(&mut *conn)
                .await?;
        }
    }
    Ok(())
}

async fn add_animal_sqlite(
    backend: &SqliteBackend,
    animal: &NewAnimal,
    follow_up_tasks: &[NewTask],
) -> Result<i64, BackendError> {
    let now = Utc::now().timestamp();
    let mut tx = backend.pool.begin().await?;
    let id = sqlx::query(
        r#"
INSERT INTO animal (
    kind,
    name,
    color,
    intake_type,
    intake_ts,
    image,
    age,
    description,
    sex,
    ready_to_adopt,
    shelter_id
)
VALUES ( ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11 )
        "#,
    )
    .bind(animal.species().as_str())
    .bind(&animal.name)
    .bind(&animal.color)
    .bind(animal.intake_type.map(|v| v.code()))
    .bind(animal.intake_ts.unwrap_or(now))
    .bind(&animal.image)
    .bind(animal.age)
    .bind(&animal.description)
    .bind(animal.sex.map(|v| v.code()))
    .bind(animal.ready_to_adopt)
    .bind(animal.shelter_id)
    .execute(&mut *tx)
    .await?
    .last_insert_rowid();

    insert_kind(&mut *tx, id, &animal.kind).await?;
    for task in follow_up_tasks {
        insert_task(&mut *tx, task, Some(id), now).await?;
    }

    tx.commit().await?;
    log::info!(
        "added {} {id} with {} follow-up task(s)",
        animal.species(),
        follow_up_tasks.len(),
    );
    Ok(id)
}

async fn get_animal_sqlite(
    backend: &SqliteBackend,
    id: i64,
) -> Result<Animal, BackendError> {
    let row = sqlx::query(&format!("{SELECT_ANIMAL} WHERE animal.id = ?1"))
        .bind(id)
        .fetch_one(&*backend.pool)
        .await?;
    animal_from_row(&row)
}

async fn list_animals_sqlite(
    backend: &SqliteBackend,
    query: &AnimalQuery,
) -> Result<Animals, BackendError> {
    let mut builder = QueryBuilder::<Sqlite>::new(SELECT_ANIMAL);
    builder.push(" WHERE 1 = 1");
    if !query.shelter_names.is_empty() {
        builder.push(" AND shelter.name IN (");
        let mut separated = builder.separated(", ");
        for name in query.shelter_names.iter() {
            separated.push_bind(name.as_str());
        }
        separated.push_unseparated(")");
    }
    if !query.colors.is_empty() {
        builder.push(" AND animal.color IN (");
        let mut separated = builder.separated(", ");
        for color in query.colors.iter() {
            separated.push_bind(color.as_str());
        }
        separated.push_unseparated(")");
    }
    if !query.sexes.is_empty() {
        builder.push(" AND animal.sex IN (");
        let mut separated = builder.separated(", ");
        for sex in query.sexes.iter() {
            separated.push_bind(sex.code());
        }
        separated.push_unseparated(")");
    }
    builder.push(" ORDER BY animal.id");
    let rows = builder.build()
        .fetch_all(&*backend.pool)
        .await?;
    animals_from_rows(rows)
}

async fn update_animal_sqlite(
    backend: &SqliteBackend,
    id: i64,
    animal: &NewAnimal,
) -> Result<bool, BackendError> {
    let mut tx = backend.pool.begin().await?;
    // the kind is part of the condition as it may not be changed
    let rows_affected = sqlx::query(
        r#"
UPDATE
    animal
SET
    name = ?3,
    color = ?4,
    intake_type = ?5,
    intake_ts = COALESCE(?6, intake_ts),
    image = ?7,
    age = ?8,
    description = ?9,
    sex = ?10,
    ready_to_adopt = ?11,
    shelter_id = ?12
WHERE
    id = ?1
    AND kind = ?2
        "#,
    )
    .bind(id)
    .bind(animal.species().as_str())
    .bind(&animal.name)
    .bind(&animal.color)
    .bind(animal.intake_type.map(|v| v.code()))
    .bind(animal.intake_ts)
    .bind(&animal.image)
    .bind(animal.age)
    .bind(&animal.description)
    .bind(animal.sex.map(|v| v.code()))
    .bind(animal.ready_to_adopt)
    .bind(animal.shelter_id)
    .execute(&mut *tx)
    .await?
    .rows_affected();
    if rows_affected == 0 {
        tx.rollback().await?;
        return Ok(false);
    }
    update_kind(&mut *tx, id, &animal.kind).await?;
    tx.commit().await?;
    Ok(true)
}

async fn delete_animal_sqlite(
    backend: &SqliteBackend,
    id: i64,
) -> Result<bool, BackendError> {
    let rows_affected = sqlx::query("DELETE FROM animal WHERE id = ?1")
        .bind(id)
        .execute(&*backend.pool)
        .await?
        .rows_affected();
    Ok(rows_affected > 0)
}

async fn animal_filter_options_sqlite(
    backend: &SqliteBackend,
) -> Result<AnimalFilterOptions, BackendError> {
    let sexes = sqlx::query(
        "SELECT DISTINCT sex FROM animal WHERE sex IS NOT NULL ORDER BY sex"
    )
        .try_map(|row: SqliteRow| row.try_get::<String, _>("sex"))
        .fetch_all(&*backend.pool)
        .await?
        .into_iter()
        .filter_map(|s| s.parse::<Sex>().ok())
        .collect();
    let colors = sqlx::query("SELECT DISTINCT color FROM animal ORDER BY color")
        .try_map(|row: SqliteRow| row.try_get::<String, _>("color"))
        .fetch_all(&*backend.pool)
        .await?;
    let shelter_names = sqlx::query("SELECT DISTINCT name FROM shelter ORDER BY name")
        .try_map(|row: SqliteRow| row.try_get::<String, _>("name"))
        .fetch_all(&*backend.pool)
        .await?;
    Ok(AnimalFilterOptions {
        sexes,
        colors,
        shelter_names,
    })
}

async fn list_featured_animals_sqlite(
    backend: &SqliteBackend,
    limit: i64,
) -> Result<Animals, BackendError> {
    let rows = sqlx::query(&format!("{SELECT_ANIMAL} ORDER BY RANDOM() LIMIT ?1"))
        .bind(limit)
        .fetch_all(&*backend.pool)
        .await?;
    animals_from_rows(rows)
}

#[async_trait]
impl AnimalBackend for SqliteBackend {
    async fn add_animal(
        &self,
        animal: &NewAnimal,
        follow_up_tasks: &[NewTask],
    ) -> Result<i64, BackendError> {
        add_animal_sqlite(&self, animal, follow_up_tasks).await
    }

    async fn get_animal(
        &self,
        id: i64,
    ) -> Result<Animal, BackendError> {
        get_animal_sqlite(&self, id).await
    }

    async fn list_animals(
        &self,
        query: &AnimalQuery,
    ) -> Result<Animals, BackendError> {
        list_animals_sqlite(&self, query).await
    }

    async fn update_animal(
        &self,
        id: i64,
        animal: &NewAnimal,
    ) -> Result<bool, BackendError> {
        update_animal_sqlite(&self, id, animal).await
    }

    async fn delete_animal(
        &self,
        id: i64,
    ) -> Result<bool, BackendError> {
        delete_animal_sqlite(&self, id).await
    }

    async fn animal_filter_options(
        &self,
    ) -> Result<AnimalFilterOptions, BackendError> {
        animal_filter_options_sqlite(&self).await
    }

    async fn list_featured_animals(
        &self,
        limit: i64,
    ) -> Result<Animals, BackendError> {
        list_featured_animals_sqlite(&self, limit).await
    }
}
