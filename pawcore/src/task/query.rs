use serde::{Deserialize, Serialize};
use crate::serde_helpers::empty_string_as_none;

/// Completion filter; values other than `completed` and `incomplete`
/// select every task.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum CompletionStatus {
    #[default]
    All,
    Completed,
    Incomplete,
}

/// The allow-list of columns tasks may be sorted by; anything else
/// sorts by title.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum TaskSortKey {
    #[default]
    Title,
    DueDate,
    CreationDatetime,
}

/// All filters that are set must match.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TaskQuery {
    #[serde(rename = "completion_status")]
    pub status: CompletionStatus,
    #[serde(rename = "assignee", deserialize_with = "empty_string_as_none")]
    pub assignee_id: Option<i64>,
    #[serde(rename = "animal", deserialize_with = "empty_string_as_none")]
    pub animal_id: Option<i64>,
    pub sort: TaskSortKey,
}

impl CompletionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompletionStatus::All => "all",
            CompletionStatus::Completed => "completed",
            CompletionStatus::Incomplete => "incomplete",
        }
    }
}

impl From<&str> for CompletionStatus {
    fn from(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "completed" => CompletionStatus::Completed,
            "incomplete" => CompletionStatus::Incomplete,
            _ => CompletionStatus::All,
        }
    }
}

impl From<String> for CompletionStatus {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

impl From<CompletionStatus> for String {
    fn from(v: CompletionStatus) -> Self {
        v.as_str().to_string()
    }
}

impl TaskSortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskSortKey::Title => "title",
            TaskSortKey::DueDate => "due_date",
            TaskSortKey::CreationDatetime => "creation_datetime",
        }
    }

    /// The column to order by; only these names are ever placed into a
    /// statement.
    pub fn column(&self) -> &'static str {
        match self {
            TaskSortKey::Title => "title",
            TaskSortKey::DueDate => "due_ts",
            TaskSortKey::CreationDatetime => "created_ts",
        }
    }
}

impl From<&str> for TaskSortKey {
    fn from(s: &str) -> Self {
        match s {
            "due_date" => TaskSortKey::DueDate,
            "creation_datetime" => TaskSortKey::CreationDatetime,
            _ => TaskSortKey::Title,
        }
    }
}

impl From<String> for TaskSortKey {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

impl From<TaskSortKey> for String {
    fn from(v: TaskSortKey) -> Self {
        v.as_str().to_string()
    }
}

impl TaskQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: CompletionStatus) -> Self {
        self.status = status;
        self
    }

    pub fn assignee_id(mut self, assignee_id: i64) -> Self {
        self.assignee_id = Some(assignee_id);
        self
    }

    pub fn animal_id(mut self, animal_id: i64) -> Self {
        self.animal_id = Some(animal_id);
        self
    }

    pub fn sort(mut self, sort: TaskSortKey) -> Self {
        self.sort = sort;
        self
    }
}
