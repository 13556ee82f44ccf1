use futures::future;
use pawcore::{
    animal::AnimalQuery,
    person::PersonType,
    task::{
        Task,
        TaskQuery,
    },
};

use crate::{
    error::PlatformError,
    platform::{
        Dashboard,
        Platform,
        TaskDetail,
    },
};

impl Platform {
    async fn task_detail(
        &self,
        mut task: Task,
    ) -> Result<TaskDetail, PlatformError> {
        task.items = Some(self.list_task_items(task.id).await?);
        let comments = self.list_task_comments(task.id).await?;
        Ok(TaskDetail { task, comments })
    }

    /// The filtered and sorted tasks, each with their items and
    /// comments, along with every animal and worker.
    pub async fn dashboard(
        &self,
        query: &TaskQuery,
    ) -> Result<Dashboard, PlatformError> {
        let tasks = self.list_tasks(query).await?;
        let tasks = future::try_join_all(
            tasks.into_iter()
                .map(|task| self.task_detail(task))
        ).await?;
        let animals = self.list_animals(&AnimalQuery::default()).await?;
        let workers = self.sm_platform
            .list_persons(Some(PersonType::Worker))
            .await?;
        Ok(Dashboard { tasks, animals, workers })
    }
}
