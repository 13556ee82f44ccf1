use pawcore::{
    comment::{
        Comment,
        Comments,
        CommentTarget,
        NewComment,
    },
    form::CommentForm,
};

use crate::{
    actor::Actor,
    error::{
        not_found,
        PlatformError,
    },
    platform::Platform,
};

impl Platform {
    async fn add_comment(
        &self,
        author: Option<&Actor>,
        target: CommentTarget,
        text: &str,
    ) -> Result<i64, PlatformError> {
        let text = CommentForm { text: text.to_string() }.validate()?;
        let id = self.sm_platform
            .add_comment(&NewComment {
                person_id: author.map(|actor| actor.person_id),
                text,
                target,
            })
            .await?;
        log::trace!("comment {id} added on {} {}", target.kind(), target.id());
        Ok(id)
    }

    pub async fn add_task_comment(
        &self,
        author: Option<&Actor>,
        task_id: i64,
        text: &str,
    ) -> Result<i64, PlatformError> {
        self.get_task(task_id).await?;
        self.add_comment(author, CommentTarget::Task(task_id), text).await
    }

    pub async fn add_animal_comment(
        &self,
        author: Option<&Actor>,
        animal_id: i64,
        text: &str,
    ) -> Result<i64, PlatformError> {
        self.get_animal(animal_id).await?;
        self.add_comment(author, CommentTarget::Animal(animal_id), text).await
    }

    pub async fn get_comment(
        &self,
        id: i64,
    ) -> Result<Comment, PlatformError> {
        self.sm_platform
            .get_comment(id)
            .await
            .map_err(not_found(format!("comment {id}")))
    }

    pub async fn list_task_comments(
        &self,
        task_id: i64,
    ) -> Result<Comments, PlatformError> {
        Ok(self.sm_platform.list_comments(CommentTarget::Task(task_id)).await?)
    }

    pub async fn list_animal_comments(
        &self,
        animal_id: i64,
    ) -> Result<Comments, PlatformError> {
        Ok(self.sm_platform.list_comments(CommentTarget::Animal(animal_id)).await?)
    }
}
