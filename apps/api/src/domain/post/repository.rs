use super::entity::{Post, Slug};
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Posts with a slug and a publish date in the past, newest first.
    async fn published_posts(&self) -> Result<Vec<Post>, DomainError>;
    async fn post_by_slug(&self, slug: &Slug) -> Result<Option<Post>, DomainError>;
}
