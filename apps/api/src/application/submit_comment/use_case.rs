use super::dto::{SUBMITTED_MESSAGE, SubmitCommentRequest, SubmitCommentResponse};
use crate::domain::{
    comment::{entity::NewComment, repository::CommentRepository},
    shared::errors::DomainError,
};
use crate::infrastructure::verification::traits::{HumanVerifier, VerificationRequest};
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Validate, verify, persist. Each step short-circuits, so a rejected
/// submission never reaches the store.
pub struct SubmitCommentUseCase {
    comments: Arc<dyn CommentRepository>,
    verifier: Arc<dyn HumanVerifier>,
}

impl SubmitCommentUseCase {
    pub fn new(comments: Arc<dyn CommentRepository>, verifier: Arc<dyn HumanVerifier>) -> Self {
        Self { comments, verifier }
    }

    #[instrument(skip(self, request), fields(post_id = request.post_id.as_deref().unwrap_or("")))]
    pub async fn execute(
        &self,
        request: SubmitCommentRequest,
        remote_ip: Option<String>,
    ) -> Result<SubmitCommentResponse, DomainError> {
        let submission = request.validate()?;

        let outcome = self
            .verifier
            .verify(&VerificationRequest {
                token: submission.verification_token.clone(),
                remote_ip,
            })
            .await?;
        if !outcome.success {
            warn!(error_codes = ?outcome.error_codes, "Verification rejected comment submission");
            return Err(DomainError::VerificationFailed(outcome.error_codes));
        }

        let comment = NewComment::pending(
            submission.post,
            submission.author_name,
            submission.author_email,
            submission.comment_text,
            Utc::now(),
        );
        let comment_id = self.comments.create_comment(&comment).await?;
        info!(comment_id = %comment_id, "Comment stored pending moderation");

        Ok(SubmitCommentResponse {
            message: SUBMITTED_MESSAGE.to_string(),
            comment_id,
        })
    }
}
