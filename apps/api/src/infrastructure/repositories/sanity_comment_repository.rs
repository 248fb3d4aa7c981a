use crate::domain::{
    comment::{
        entity::{Comment, NewComment},
        repository::CommentRepository,
    },
    shared::errors::DomainError,
};
use crate::infrastructure::sanity::client::SanityClient;
use async_trait::async_trait;
use chrono::SecondsFormat;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::warn;

/// Approved comments for one post, oldest first. The email is never projected.
const APPROVED_COMMENTS_QUERY: &str = r#"*[_type == "comment" && post._ref == $postId && approved == true] | order(coalesce(createdAt, _createdAt) asc) {
  _id,
  "postId": post._ref,
  authorName,
  commentText,
  "createdAt": coalesce(createdAt, _createdAt),
  approved
}"#;

pub struct SanityCommentRepository {
    client: Arc<SanityClient>,
}

impl SanityCommentRepository {
    pub fn new(client: Arc<SanityClient>) -> Self {
        Self { client }
    }
}

pub fn comment_document(comment: &NewComment) -> Value {
    let mut document = json!({
        "_type": "comment",
        "post": {
            "_type": "reference",
            "_ref": comment.post().as_str(),
        },
        "authorName": comment.author_name().as_str(),
        "commentText": comment.comment_text().as_str(),
        "createdAt": comment.created_at().to_rfc3339_opts(SecondsFormat::Millis, true),
        "approved": comment.approved(),
    });
    if let Some(email) = comment.author_email() {
        document["authorEmail"] = Value::String(email.as_str().to_string());
    }
    document
}

#[async_trait]
impl CommentRepository for SanityCommentRepository {
    async fn create_comment(&self, comment: &NewComment) -> Result<String, DomainError> {
        self.client.create(comment_document(comment)).await
    }

    async fn approved_comments(&self, post_id: &str) -> Result<Vec<Comment>, DomainError> {
        let records: Option<Vec<Value>> = self
            .client
            .query(APPROVED_COMMENTS_QUERY, &[("postId", json!(post_id))])
            .await?;
        Ok(decode_comments(records.unwrap_or_default()))
    }
}

/// Decode each record on its own so one malformed document cannot hide the
/// rest of the thread.
fn decode_comments(records: Vec<Value>) -> Vec<Comment> {
    records
        .into_iter()
        .filter_map(|record| {
            let id = record
                .get("_id")
                .and_then(Value::as_str)
                .unwrap_or("<unknown>")
                .to_string();
            match serde_json::from_value::<Comment>(record) {
                Ok(comment) => Some(comment),
                Err(e) => {
                    warn!(comment_id = %id, error = %e, "Skipping malformed comment record");
                    None
                }
            }
        })
        .collect()
}
