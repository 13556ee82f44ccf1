use async_trait::async_trait;
use pawcore::{
    error::BackendError,
    task::{
        CompletionStatus,
        DEFAULT_DUE_SECS,
        NewTask,
        Task,
        TaskItem,
        TaskItems,
        TaskQuery,
        Tasks,
        TaskUpdate,
        traits::{
            TaskBackend,
            TaskItemBackend,
        },
    },
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
};

const SELECT_TASK: &str = r#"
SELECT
    id,
    title,
    description,
    shelter_id,
    assignee_id,
    due_ts,
    completed_ts,
    created_ts,
    required_role,
    animal_id
FROM
    task
"#;

fn task_from_row(row: SqliteRow) -> Result<Task, sqlx::Error> {
    let required_role: String = row.try_get("required_role")?;
    Ok(Task {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        shelter_id: row.try_get("shelter_id")?,
        assignee_id: row.try_get("assignee_id")?,
        due_ts: row.try_get("due_ts")?,
        completed_ts: row.try_get("completed_ts")?,
        created_ts: row.try_get("created_ts")?,
        required_role: required_role.parse()
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?,
        animal_id: row.try_get("animal_id")?,
        items: None,
    })
}

fn task_item_from_row(row: SqliteRow) -> Result<TaskItem, sqlx::Error> {
    Ok(TaskItem {
        id: row.try_get("id")?,
        task_id: row.try_get("task_id")?,
        title: row.try_get("title")?,
        completed_ts: row.try_get("completed_ts")?,
    })
}

/// Insert the task and its items using the provided connection, such
/// that the caller may include this as part of its transaction.  The
/// `animal_id` of the task is replaced if one is provided.
pub(crate) async fn insert_task(
    conn: &mut SqliteConnection,
    task: &NewTask,
    animal_id: Option<i64>,
    created_ts: i64,
) -> Result<i64, BackendError> {
    let due_ts = task.due_ts.unwrap_or(created_ts + DEFAULT_DUE_SECS);
    let id = sqlx::query(
        r#"
INSERT INTO task (
    title,
    description,
    shelter_id,
    assignee_id,
    due_ts,
    created_ts,
    required_role,
    animal_id
)
VALUES ( ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8 )
        "#,
    )
    .bind(&task.title)
    .bind(&task.description)
    .bind(task.shelter_id)
    .bind(task.assignee_id)
    .bind(due_ts)
    .bind(created_ts)
    .bind(task.required_role.code())
    .bind(animal_id.or(task.animal_id))
    .execute(&mut *conn)
    .await?
    .last_insert_rowid();

    for title in task.items.iter() {
        sqlx::query(
            r#"
INSERT INTO task_item (
    task_id,
    title
)
VALUES ( ?1, ?2 )
            "#,
        )
        .bind(id)
        .bind(title)
        .execute(&mut *conn)
        .await?;
    }
    log::trace!("inserted task {id} with {} item(s)", task.items.len());
    Ok(id)
}

async fn add_task_sqlite(
    backend: &SqliteBackend,
    task: &NewTask,
) -> Result<i64, BackendError> {
    let created_ts = Utc::now().timestamp();
    let mut tx = backend.pool.begin().await?;
    let id = insert_task(&mut *tx, task, None, created_ts).await?;
    tx.commit().await?;
    Ok(id)
}

async fn get_task_sqlite(
    backend: &SqliteBackend,
    id: i64,
) -> Result<Task, BackendError> {
    let mut task = sqlx::query(&format!("{SELECT_TASK} WHERE id = ?1"))
        .bind(id)
        .try_map(task_from_row)
        .fetch_one(&*backend.pool)
        .await?;
    task.items = Some(list_task_items_sqlite(backend, id).await?);
    Ok(task)
}

async fn update_task_sqlite(
    backend: &SqliteBackend,
    id: i64,
    update: &TaskUpdate,
) -> Result<bool, BackendError> {
    let rows_affected = sqlx::query(
        r#"
UPDATE
    task
SET
    title = ?2,
    description = ?3,
    completed_ts = ?4,
    assignee_id = ?5,
    animal_id = ?6,
    required_role = ?7
WHERE
    id = ?1
        "#,
    )
    .bind(id)
    .bind(&update.title)
    .bind(&update.description)
    .bind(update.completed_ts)
    .bind(update.assignee_id)
    .bind(update.animal_id)
    .bind(update.required_role.code())
    .execute(&*backend.pool)
    .await?
    .rows_affected();
    Ok(rows_affected > 0)
}

async fn delete_task_sqlite(
    backend: &SqliteBackend,
    id: i64,
) -> Result<bool, BackendError> {
    let rows_affected = sqlx::query("DELETE FROM task WHERE id = ?1")
        .bind(id)
        .execute(&*backend.pool)
        .await?
        .rows_affected();
    Ok(rows_affected > 0)
}

async fn set_task_completed_ts_sqlite(
    backend: &SqliteBackend,
    id: i64,
    completed_ts: Option<i64>,
) -> Result<bool, BackendError> {
    let rows_affected = sqlx::query("UPDATE task SET completed_ts = ?2 WHERE id = ?1")
        .bind(id)
        .bind(completed_ts)
        .execute(&*backend.pool)
        .await?
        .rows_affected();
    Ok(rows_affected > 0)
}

async fn list_tasks_sqlite(
    backend: &SqliteBackend,
    query: &TaskQuery,
) -> Result<Tasks, BackendError> {
    let mut builder = QueryBuilder::<Sqlite>::new(SELECT_TASK);
    builder.push(" WHERE 1 = 1");
    match query.status {
        CompletionStatus::Completed => {
            builder.push(" AND completed_ts IS NOT NULL");
        }
        CompletionStatus::Incomplete => {
            builder.push(" AND completed_ts IS NULL");
        }
        CompletionStatus::All => (),
    }
    if let Some(assignee_id) = query.assignee_id {
        builder.push(" AND assignee_id = ").push_bind(assignee_id);
    }
    if let Some(animal_id) = query.animal_id {
        builder.push(" AND animal_id = ").push_bind(animal_id);
    }
    builder.push(" ORDER BY ")
        .push(query.sort.column())
        .push(", id");
    let result = builder.build()
        .try_map(task_from_row)
        .fetch_all(&*backend.pool)
        .await?;
    Ok(result.into())
}

async fn add_task_item_sqlite(
    backend: &SqliteBackend,
    task_id: i64,
    title: &str,
) -> Result<i64, BackendError> {
    let id = sqlx::query(
        r#"
INSERT INTO task_item (
    task_id,
    title
)
VALUES ( ?1, ?2 )
        "#,
    )
    .bind(task_id)
    .bind(title)
    .execute(&*backend.pool)
    .await?
    .last_insert_rowid();
    Ok(id)
}

async fn get_task_item_sqlite(
    backend: &SqliteBackend,
    id: i64,
) -> Result<TaskItem, BackendError> {
    let result = sqlx::query(
        r#"
SELECT
    id,
    task_id,
    title,
    completed_ts
FROM
    task_item
WHERE
    id = ?1
        "#,
    )
    .bind(id)
    .try_map(task_item_from_row)
    .fetch_one(&*backend.pool)
    .await?;
    Ok(result)
}

async fn list_task_items_sqlite(
    backend: &SqliteBackend,
    task_id: i64,
) -> Result<TaskItems, BackendError> {
    let result = sqlx::query(
        r#"
SELECT
    id,
    task_id,
    title,
    completed_ts
FROM
    task_item
WHERE
    task_id = ?1
ORDER BY
    id
        "#,
    )
    .bind(task_id)
    .try_map(task_item_from_row)
    .fetch_all(&*backend.pool)
    .await?;
    Ok(result.into())
}

async fn set_task_item_completed_ts_sqlite(
    backend: &SqliteBackend,
    id: i64,
    completed_ts: Option<i64>,
) -> Result<bool, BackendError> {
    let rows_affected = sqlx::query("UPDATE task_item SET completed_ts = ?2 WHERE id = ?1")
        .bind(id)
        .bind(completed_ts)
        .execute(&*backend.pool)
        .await?
        .rows_affected();
    Ok(rows_affected > 0)
}

#[async_trait]
impl TaskBackend for SqliteBackend {
    async fn add_task(
        &self,
        task: &NewTask,
    ) -> Result<i64, BackendError> {
        add_task_sqlite(&self, task).await
    }

    async fn get_task(
        &self,
        id: i64,
    ) -> Result<Task, BackendError> {
        get_task_sqlite(&self, id).await
    }

    async fn update_task(
        &self,
        id: i64,
        update: &TaskUpdate,
    ) -> Result<bool, BackendError> {
        update_task_sqlite(&self, id, update).await
    }

    async fn delete_task(
        &self,
        id: i64,
    ) -> Result<bool, BackendError> {
        delete_task_sqlite(&self, id).await
    }

    async fn set_task_completed_ts(
        &self,
        id: i64,
        completed_ts: Option<i64>,
    ) -> Result<bool, BackendError> {
        set_task_completed_ts_sqlite(&self, id, completed_ts).await
    }

    async fn list_tasks(
        &self,
        query: &TaskQuery,
    ) -> Result<Tasks, BackendError> {
        list_tasks_sqlite(&self, query).await
    }
}

#[async_trait]
impl TaskItemBackend for SqliteBackend {
    async fn add_task_item(
        &self,
        task_id: i64,
        title: &str,
    ) -> Result<i64, BackendError> {
        add_task_item_sqlite(&self, task_id, title).await
    }

    async fn get_task_item(
        &self,
        id: i64,
    ) -> Result<TaskItem, BackendError> {
        get_task_item_sqlite(&self, id).await
    }

    async fn list_task_items(
        &self,
        task_id: i64,
    ) -> Result<TaskItems, BackendError> {
        list_task_items_sqlite(&self, task_id).await
    }

    async fn set_task_item_completed_ts(
        &self,
        id: i64,
        completed_ts: Option<i64>,
    ) -> Result<bool, BackendError> {
        set_task_item_completed_ts_sqlite(&self, id, completed_ts).await
    }
}
