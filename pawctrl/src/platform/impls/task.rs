use pawcore::{
    comment::CommentTarget,
    task::{
        NewTask,
        RequiredRole,
        Task,
        TaskItem,
        TaskItems,
        TaskQuery,
        Tasks,
        TaskUpdate,
    },
};

use crate::{
    actor::Actor,
    error::{
        not_found,
        CtrlError,
        PlatformError,
    },
    platform::{
        Platform,
        TaskDetail,
    },
};
use super::reference::References;

impl Platform {
    pub async fn add_task(
        &self,
        task: &NewTask,
    ) -> Result<i64, PlatformError> {
        self.check_references(References {
            shelter_id: Some(task.shelter_id),
            assignee_id: task.assignee_id,
            animal_id: task.animal_id,
        }).await?;
        let id = self.sm_platform.add_task(task).await?;
        log::info!("added task {id} {:?} at shelter {}", task.title, task.shelter_id);
        Ok(id)
    }

    /// The task along with its items.
    pub async fn get_task(
        &self,
        id: i64,
    ) -> Result<Task, PlatformError> {
        self.sm_platform
            .get_task(id)
            .await
            .map_err(not_found(format!("task {id}")))
    }

    /// The task along with its items and comments.
    pub async fn get_task_detail(
        &self,
        id: i64,
    ) -> Result<TaskDetail, PlatformError> {
        let task = self.get_task(id).await?;
        let comments = self.sm_platform
            .list_comments(CommentTarget::Task(id))
            .await?;
        Ok(TaskDetail { task, comments })
    }

    pub async fn update_task(
        &self,
        id: i64,
        update: &TaskUpdate,
    ) -> Result<(), PlatformError> {
        self.check_references(References {
            assignee_id: update.assignee_id,
            animal_id: update.animal_id,
            ..Default::default()
        }).await?;
        self.sm_platform
            .update_task(id, update)
            .await?
            .then_some(())
            .ok_or_else(|| CtrlError::NotFound(format!("task {id}")).into())
    }

    pub async fn delete_task(
        &self,
        actor: &Actor,
        id: i64,
    ) -> Result<(), PlatformError> {
        actor.require(RequiredRole::Manager)?;
        self.sm_platform
            .delete_task(id)
            .await?
            .then_some(())
            .ok_or_else(|| CtrlError::NotFound(format!("task {id}")))?;
        log::info!("task {id} deleted by {}", actor.username);
        Ok(())
    }

    /// Mark the task as completed by the actor, whose role must satisfy
    /// the role the task requires.  Completing a completed task keeps
    /// the original completion time.
    pub async fn complete_task(
        &self,
        actor: &Actor,
        id: i64,
    ) -> Result<Task, PlatformError> {
        let task = self.get_task(id).await?;
        actor.require(task.required_role)?;
        if task.is_completed() {
            return Ok(task);
        }
        self.sm_platform
            .set_task_completed_ts(id, Some(self.now()))
            .await?;
        log::info!("task {id} completed by {}", actor.username);
        self.get_task(id).await
    }

    pub async fn reopen_task(
        &self,
        id: i64,
    ) -> Result<Task, PlatformError> {
        self.sm_platform
            .set_task_completed_ts(id, None)
            .await?
            .then_some(())
            .ok_or_else(|| CtrlError::NotFound(format!("task {id}")))?;
        self.get_task(id).await
    }

    pub async fn list_tasks(
        &self,
        query: &TaskQuery,
    ) -> Result<Tasks, PlatformError> {
        Ok(self.sm_platform.list_tasks(query).await?)
    }
}

// Checklist items

impl Platform {
    pub async fn add_task_item(
        &self,
        task_id: i64,
        title: &str,
    ) -> Result<i64, PlatformError> {
        // ensure a missing task is reported as such
        self.get_task(task_id).await?;
        Ok(self.sm_platform.add_task_item(task_id, title).await?)
    }

    pub async fn list_task_items(
        &self,
        task_id: i64,
    ) -> Result<TaskItems, PlatformError> {
        Ok(self.sm_platform.list_task_items(task_id).await?)
    }

    /// Flip the completion of the item, which must belong to the task.
    pub async fn toggle_task_item(
        &self,
        task_id: i64,
        item_id: i64,
    ) -> Result<TaskItem, PlatformError> {
        let mut item = self.sm_platform
            .get_task_item(item_id)
            .await
            .map_err(not_found(format!("task item {item_id}")))?;
        if item.task_id != task_id {
            Err(CtrlError::NotFound(format!("task item {item_id} of task {task_id}")))?
        }
        item.completed_ts = match item.completed_ts {
            Some(_) => None,
            None => Some(self.now()),
        };
        self.sm_platform
            .set_task_item_completed_ts(item_id, item.completed_ts)
            .await?;
        Ok(item)
    }
}
