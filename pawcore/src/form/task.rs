use serde::{Deserialize, Serialize};
use crate::{
    error::ValidationError,
    serde_helpers::empty_string_as_none,
    task::{
        NewTask,
        TaskUpdate,
    },
};
use super::*;

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub due_date: String,
    #[serde(deserialize_with = "empty_string_as_none")]
    pub assignee: Option<i64>,
    #[serde(deserialize_with = "empty_string_as_none")]
    pub animal: Option<i64>,
    pub required_role: String,
    /// Checklist item titles, one per line.
    pub items: String,
}

/// The fields of a task that staff may edit.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TaskEditForm {
    pub title: String,
    pub description: String,
    pub completion_date: String,
    #[serde(deserialize_with = "empty_string_as_none")]
    pub assignee: Option<i64>,
    #[serde(deserialize_with = "empty_string_as_none")]
    pub animal: Option<i64>,
    pub required_role: String,
}

impl TaskForm {
    pub fn validate(&self, shelter_id: i64) -> Result<NewTask, ValidationError> {
        let mut errors = ValidationError::new();
        let items = self.items
            .lines()
            .filter_map(|line| optional(&mut errors, "items", line, 100))
            .collect();
        let task = NewTask {
            title: required(&mut errors, "title", &self.title, 100),
            description: required(&mut errors, "description", &self.description, usize::MAX),
            shelter_id,
            assignee_id: self.assignee,
            due_ts: date(&mut errors, "due_date", &self.due_date),
            required_role: choice(&mut errors, "required_role", &self.required_role)
                .unwrap_or_default(),
            animal_id: self.animal,
            items,
        };
        errors.check(task)
    }
}

impl TaskEditForm {
    pub fn validate(&self) -> Result<TaskUpdate, ValidationError> {
        let mut errors = ValidationError::new();
        let update = TaskUpdate {
            title: required(&mut errors, "title", &self.title, 100),
            description: required(&mut errors, "description", &self.description, usize::MAX),
            completed_ts: date(&mut errors, "completion_date", &self.completion_date),
            assignee_id: self.assignee,
            animal_id: self.animal,
            required_role: choice(&mut errors, "required_role", &self.required_role)
                .unwrap_or_default(),
        };
        errors.check(update)
    }
}
