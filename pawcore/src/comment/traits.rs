use async_trait::async_trait;
use crate::error::BackendError;
use super::{
    Comment,
    Comments,
    CommentTarget,
    NewComment,
};

#[async_trait]
pub trait CommentBackend {
    async fn add_comment(
        &self,
        comment: &NewComment,
    ) -> Result<i64, BackendError>;
    async fn get_comment(
        &self,
        id: i64,
    ) -> Result<Comment, BackendError>;
    /// Comments made on the target, oldest first.
    async fn list_comments(
        &self,
        target: CommentTarget,
    ) -> Result<Comments, BackendError>;
}
