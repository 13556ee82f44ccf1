use async_trait::async_trait;
use crate::error::BackendError;
use super::{
    NewTask,
    Task,
    TaskItem,
    TaskItems,
    TaskQuery,
    Tasks,
    TaskUpdate,
};

#[async_trait]
pub trait TaskBackend {
    /// Stores the task along with its checklist items.
    async fn add_task(
        &self,
        task: &NewTask,
    ) -> Result<i64, BackendError>;
    /// The returned task has its items loaded.
    async fn get_task(
        &self,
        id: i64,
    ) -> Result<Task, BackendError>;
    async fn update_task(
        &self,
        id: i64,
        update: &TaskUpdate,
    ) -> Result<bool, BackendError>;
    async fn delete_task(
        &self,
        id: i64,
    ) -> Result<bool, BackendError>;
    async fn set_task_completed_ts(
        &self,
        id: i64,
        completed_ts: Option<i64>,
    ) -> Result<bool, BackendError>;
    async fn list_tasks(
        &self,
        query: &TaskQuery,
    ) -> Result<Tasks, BackendError>;
}

#[async_trait]
pub trait TaskItemBackend {
    async fn add_task_item(
        &self,
        task_id: i64,
        title: &str,
    ) -> Result<i64, BackendError>;
    async fn get_task_item(
        &self,
        id: i64,
    ) -> Result<TaskItem, BackendError>;
    async fn list_task_items(
        &self,
        task_id: i64,
    ) -> Result<TaskItems, BackendError>;
    async fn set_task_item_completed_ts(
        &self,
        id: i64,
        completed_ts: Option<i64>,
    ) -> Result<bool, BackendError>;
}
