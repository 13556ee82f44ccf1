use serde::{Deserialize, Serialize};

/// Seconds from creation to when a task is due, if no due date given.
pub const DEFAULT_DUE_SECS: i64 = 7 * 24 * 60 * 60;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub shelter_id: i64,
    pub assignee_id: Option<i64>,
    pub due_ts: i64,
    pub completed_ts: Option<i64>,
    pub created_ts: i64,
    pub required_role: RequiredRole,
    pub animal_id: Option<i64>,

    pub items: Option<TaskItems>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub shelter_id: i64,
    pub assignee_id: Option<i64>,
    pub due_ts: Option<i64>,
    pub required_role: RequiredRole,
    pub animal_id: Option<i64>,
    /// Titles of the checklist items to create along with the task.
    pub items: Vec<String>,
}

/// The editable fields of a task.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct TaskUpdate {
    pub title: String,
    pub description: String,
    pub completed_ts: Option<i64>,
    pub assignee_id: Option<i64>,
    pub animal_id: Option<i64>,
    pub required_role: RequiredRole,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct TaskItem {
    pub id: i64,
    pub task_id: i64,
    pub title: String,
    pub completed_ts: Option<i64>,
}

/// The role needed to complete a task.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Deserialize, Serialize)]
pub enum RequiredRole {
    #[serde(rename = "MA")]
    Manager,
    #[serde(rename = "RE")]
    Regular,
    #[serde(rename = "VT")]
    Vet,
    #[default]
    #[serde(rename = "NA")]
    Any,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Tasks(Vec<Task>);

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct TaskItems(Vec<TaskItem>);

mod impls;
mod query;
pub mod traits;

pub use query::{
    CompletionStatus,
    TaskQuery,
    TaskSortKey,
};
