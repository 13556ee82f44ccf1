use std::{
    fmt,
    ops::{
        Deref,
        DerefMut,
    },
    str::FromStr,
};
use crate::{
    error::ValueError,
    person::WorkerRole,
};
use super::*;

impl Task {
    pub fn is_completed(&self) -> bool {
        self.completed_ts.is_some()
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.title)
    }
}

impl From<&Task> for TaskUpdate {
    fn from(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            completed_ts: task.completed_ts,
            assignee_id: task.assignee_id,
            animal_id: task.animal_id,
            required_role: task.required_role,
        }
    }
}

impl TaskItem {
    pub fn is_completed(&self) -> bool {
        self.completed_ts.is_some()
    }
}

impl RequiredRole {
    pub fn code(&self) -> &'static str {
        match self {
            RequiredRole::Manager => "MA",
            RequiredRole::Regular => "RE",
            RequiredRole::Vet => "VT",
            RequiredRole::Any => "NA",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RequiredRole::Manager => "Manager",
            RequiredRole::Regular => "Regular",
            RequiredRole::Vet => "Veterinarian",
            RequiredRole::Any => "Any Role",
        }
    }

    /// Any is satisfied by every role and a manager may complete
    /// anything, otherwise the roles must match.
    pub fn is_satisfied_by(&self, role: WorkerRole) -> bool {
        match (self, role) {
            (RequiredRole::Any, _) => true,
            (_, WorkerRole::Manager) => true,
            (RequiredRole::Regular, WorkerRole::Regular) => true,
            (RequiredRole::Vet, WorkerRole::Vet) => true,
            _ => false,
        }
    }
}

impl fmt::Display for RequiredRole {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for RequiredRole {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MA" => Ok(RequiredRole::Manager),
            "RE" => Ok(RequiredRole::Regular),
            "VT" => Ok(RequiredRole::Vet),
            "NA" => Ok(RequiredRole::Any),
            s => Err(ValueError::Unsupported(s.to_string())),
        }
    }
}

impl From<WorkerRole> for RequiredRole {
    fn from(role: WorkerRole) -> Self {
        match role {
            WorkerRole::Manager => RequiredRole::Manager,
            WorkerRole::Regular => RequiredRole::Regular,
            WorkerRole::Vet => RequiredRole::Vet,
        }
    }
}

impl From<Vec<Task>> for Tasks {
    fn from(args: Vec<Task>) -> Self {
        Self(args)
    }
}

impl Deref for Tasks {
    type Target = Vec<Task>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Tasks {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl IntoIterator for Tasks {
    type Item = Task;
    type IntoIter = std::vec::IntoIter<Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<Vec<TaskItem>> for TaskItems {
    fn from(args: Vec<TaskItem>) -> Self {
        Self(args)
    }
}

impl Deref for TaskItems {
    type Target = Vec<TaskItem>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
