use crate::{
    config::Config,
    domain::{comment::repository::CommentRepository, post::repository::PostRepository},
    infrastructure::verification::traits::HumanVerifier,
};
use std::sync::Arc;

/// Shared, immutable request context. Cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub comment_repo: Arc<dyn CommentRepository>,
    pub post_repo: Arc<dyn PostRepository>,
    pub verifier: Arc<dyn HumanVerifier>,
}
