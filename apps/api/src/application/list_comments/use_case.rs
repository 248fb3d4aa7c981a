use super::dto::PublicComment;
use crate::domain::{
    comment::{moderation, repository::CommentRepository, value_objects::PostReference},
    shared::errors::DomainError,
};
use std::sync::Arc;
use tracing::{debug, instrument};

pub struct ListCommentsUseCase {
    comments: Arc<dyn CommentRepository>,
}

impl ListCommentsUseCase {
    pub fn new(comments: Arc<dyn CommentRepository>) -> Self {
        Self { comments }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, post_id: Option<&str>) -> Result<Vec<PublicComment>, DomainError> {
        let post_id = post_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| DomainError::ValidationError("Missing required fields: postId".into()))?;
        let post = PostReference::new(post_id.to_string())
            .map_err(|_| DomainError::ValidationError("Invalid fields: postId".into()))?;

        let stored = self.comments.approved_comments(post.as_str()).await?;
        let fetched = stored.len();
        let visible = moderation::visible_for_post(post.as_str(), stored);
        if visible.len() != fetched {
            debug!(
                fetched,
                visible = visible.len(),
                "Dropped comments that did not pass the moderation gate"
            );
        }

        Ok(visible.into_iter().map(PublicComment::from).collect())
    }
}
