use super::value_objects::{AuthorEmail, AuthorName, CommentText, PostReference};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// A comment as read back from the content store.
///
/// Read queries never project the author's email, so it has no field here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub post_id: Option<String>,
    pub author_name: String,
    pub comment_text: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "null_as_false")]
    pub approved: bool,
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// A comment about to be written to the content store.
///
/// The only constructor is [`NewComment::pending`], so every new record starts
/// unapproved. Approval happens outside this service.
#[derive(Debug, Clone, PartialEq)]
pub struct NewComment {
    post: PostReference,
    author_name: AuthorName,
    author_email: Option<AuthorEmail>,
    comment_text: CommentText,
    created_at: DateTime<Utc>,
    approved: bool,
}

impl NewComment {
    pub fn pending(
        post: PostReference,
        author_name: AuthorName,
        author_email: Option<AuthorEmail>,
        comment_text: CommentText,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            post,
            author_name,
            author_email,
            comment_text,
            created_at,
            approved: false,
        }
    }

    pub fn post(&self) -> &PostReference {
        &self.post
    }

    pub fn author_name(&self) -> &AuthorName {
        &self.author_name
    }

    pub fn author_email(&self) -> Option<&AuthorEmail> {
        self.author_email.as_ref()
    }

    pub fn comment_text(&self) -> &CommentText {
        &self.comment_text
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn approved(&self) -> bool {
        self.approved
    }
}
