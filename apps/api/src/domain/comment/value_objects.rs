use serde::{Deserialize, Serialize};
use validator::Validate;

pub const MAX_POST_REFERENCE_LENGTH: usize = 128;
pub const MAX_AUTHOR_NAME_LENGTH: usize = 80;
pub const MAX_COMMENT_TEXT_LENGTH: usize = 5000;

/// Identifier of the post a comment belongs to. Existence is not checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PostReference {
    #[validate(length(min = 1, max = 128))]
    pub value: String,
}

impl PostReference {
    pub fn new(value: String) -> Result<Self, validator::ValidationErrors> {
        let reference = Self {
            value: value.trim().to_string(),
        };
        reference.validate()?;
        Ok(reference)
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct AuthorName {
    #[validate(length(min = 1, max = 80))]
    pub value: String,
}

impl AuthorName {
    pub fn new(value: String) -> Result<Self, validator::ValidationErrors> {
        let name = Self {
            value: value.trim().to_string(),
        };
        name.validate()?;
        Ok(name)
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

/// Kept for the moderator only; never part of a public response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct AuthorEmail {
    #[validate(email, length(max = 254))]
    pub value: String,
}

impl AuthorEmail {
    pub fn new(value: String) -> Result<Self, validator::ValidationErrors> {
        let email = Self {
            value: value.trim().to_string(),
        };
        email.validate()?;
        Ok(email)
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CommentText {
    #[validate(length(min = 1, max = 5000))]
    pub value: String,
}

impl CommentText {
    pub fn new(value: String) -> Result<Self, validator::ValidationErrors> {
        let text = Self {
            value: value.trim().to_string(),
        };
        text.validate()?;
        Ok(text)
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}
