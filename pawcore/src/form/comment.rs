use serde::{Deserialize, Serialize};
use crate::error::ValidationError;
use super::*;

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CommentForm {
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TaskItemForm {
    pub title: String,
}

impl CommentForm {
    pub fn validate(&self) -> Result<String, ValidationError> {
        let mut errors = ValidationError::new();
        let text = required(&mut errors, "text", &self.text, usize::MAX);
        errors.check(text)
    }
}

impl TaskItemForm {
    pub fn validate(&self) -> Result<String, ValidationError> {
        let mut errors = ValidationError::new();
        let title = required(&mut errors, "title", &self.title, 100);
        errors.check(title)
    }
}
