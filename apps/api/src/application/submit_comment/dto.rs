use crate::domain::{
    comment::value_objects::{AuthorEmail, AuthorName, CommentText, PostReference},
    shared::errors::DomainError,
};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub const SUBMITTED_MESSAGE: &str = "Comment submitted successfully for moderation!";

/// Untrusted comment form payload. Every field is optional at the wire level so
/// that missing fields can be reported together instead of failing on the first.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SubmitCommentRequest {
    pub post_id: Option<String>,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
    pub comment_text: Option<String>,
    #[serde(alias = "hCaptchaToken")]
    pub verification_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SubmitCommentResponse {
    pub message: String,
    pub comment_id: String,
}

/// A submission whose fields passed validation; the token is not yet verified.
#[derive(Debug, Clone)]
pub struct CommentSubmission {
    pub post: PostReference,
    pub author_name: AuthorName,
    pub author_email: Option<AuthorEmail>,
    pub comment_text: CommentText,
    pub verification_token: String,
}

fn present(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

impl SubmitCommentRequest {
    pub fn validate(&self) -> Result<CommentSubmission, DomainError> {
        let missing: Vec<&str> = [
            ("postId", &self.post_id),
            ("authorName", &self.author_name),
            ("commentText", &self.comment_text),
            ("verificationToken", &self.verification_token),
        ]
        .into_iter()
        .filter(|(_, value)| present(value).is_none())
        .map(|(field, _)| field)
        .collect();

        if !missing.is_empty() {
            return Err(DomainError::ValidationError(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        let post = PostReference::new(self.post_id.clone().unwrap_or_default());
        let author_name = AuthorName::new(self.author_name.clone().unwrap_or_default());
        let comment_text = CommentText::new(self.comment_text.clone().unwrap_or_default());
        // An empty email field means "not provided".
        let author_email = present(&self.author_email)
            .map(|email| AuthorEmail::new(email.to_string()))
            .transpose();

        match (post, author_name, author_email, comment_text) {
            (Ok(post), Ok(author_name), Ok(author_email), Ok(comment_text)) => {
                Ok(CommentSubmission {
                    post,
                    author_name,
                    author_email,
                    comment_text,
                    verification_token: present(&self.verification_token)
                        .unwrap_or_default()
                        .to_string(),
                })
            }
            (post, author_name, author_email, comment_text) => {
                let invalid: Vec<&str> = [
                    ("postId", post.is_err()),
                    ("authorName", author_name.is_err()),
                    ("authorEmail", author_email.is_err()),
                    ("commentText", comment_text.is_err()),
                ]
                .into_iter()
                .filter(|(_, failed)| *failed)
                .map(|(field, _)| field)
                .collect();
                Err(DomainError::ValidationError(format!(
                    "Invalid fields: {}",
                    invalid.join(", ")
                )))
            }
        }
    }
}
