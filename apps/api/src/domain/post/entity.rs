use super::{image::ImageRef, portable_text::Block};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// A post's `slug.current`. It only ever travels as a query parameter, so any
/// non-blank string the editors saved is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Slug {
    #[validate(length(min = 1, max = 200))]
    pub value: String,
}

impl Slug {
    pub fn new(value: String) -> Result<Self, validator::ValidationErrors> {
        let slug = Self {
            value: value.trim().to_string(),
        };
        slug.validate()?;
        Ok(slug)
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Author {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub image: Option<ImageRef>,
}

/// A blog post as projected by the post queries, author already resolved.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    pub slug: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub main_image: Option<ImageRef>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub body: Vec<Block>,
    #[serde(default, deserialize_with = "distinct_titles")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub author: Option<Author>,
}

impl Post {
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|title| !title.is_empty())
            .unwrap_or("Untitled")
    }

    /// A post without a publish date is a draft and never public.
    pub fn is_published(&self, now: DateTime<Utc>) -> bool {
        self.published_at.is_some_and(|published| published <= now)
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

// Dereferenced category titles come back as nulls for dangling references.
fn distinct_titles<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Option<String>>>::deserialize(deserializer)?.unwrap_or_default();
    let mut titles: Vec<String> = Vec::with_capacity(raw.len());
    for title in raw.into_iter().flatten() {
        let title = title.trim();
        if !title.is_empty() && !titles.iter().any(|existing| existing == title) {
            titles.push(title.to_string());
        }
    }
    Ok(titles)
}
