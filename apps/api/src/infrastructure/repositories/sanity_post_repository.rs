use crate::domain::{
    post::{
        entity::{Post, Slug},
        repository::PostRepository,
    },
    shared::errors::DomainError,
};
use crate::infrastructure::sanity::client::SanityClient;
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

const PUBLISHED_POSTS_QUERY: &str = r#"*[_type == "post" && defined(slug.current) && publishedAt < now()] | order(publishedAt desc)[0...200] {
  _id,
  _createdAt,
  title,
  "slug": slug.current,
  excerpt,
  publishedAt,
  mainImage,
  "tags": categories[]->title,
  "author": author->{name, "slug": slug.current, image}
}"#;

const POST_BY_SLUG_QUERY: &str = r#"*[_type == "post" && slug.current == $slug][0] {
  _id,
  _createdAt,
  title,
  "slug": slug.current,
  excerpt,
  publishedAt,
  mainImage,
  body,
  "tags": categories[]->title,
  "author": author->{name, "slug": slug.current, image}
}"#;

pub struct SanityPostRepository {
    client: Arc<SanityClient>,
}

impl SanityPostRepository {
    pub fn new(client: Arc<SanityClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PostRepository for SanityPostRepository {
    async fn published_posts(&self) -> Result<Vec<Post>, DomainError> {
        let posts: Option<Vec<Post>> = self.client.query(PUBLISHED_POSTS_QUERY, &[]).await?;
        Ok(posts.unwrap_or_default())
    }

    async fn post_by_slug(&self, slug: &Slug) -> Result<Option<Post>, DomainError> {
        self.client
            .query(POST_BY_SLUG_QUERY, &[("slug", json!(slug.as_str()))])
            .await
    }
}
