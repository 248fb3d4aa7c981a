use super::entity::{Comment, NewComment};
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Create the comment document and return the identifier the store assigned.
    async fn create_comment(&self, comment: &NewComment) -> Result<String, DomainError>;
    async fn approved_comments(&self, post_id: &str) -> Result<Vec<Comment>, DomainError>;
}
