use super::dto::{AuthorSummary, PostDetail, PostSummary};
use crate::domain::{
    post::{
        entity::{Author, Post, Slug},
        image::ImageUrlBuilder,
        portable_text,
        repository::PostRepository,
    },
    shared::errors::DomainError,
};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, instrument};

const MAIN_IMAGE_WIDTH: u32 = 1200;
const AUTHOR_IMAGE_WIDTH: u32 = 96;

pub struct BlogUseCase {
    posts: Arc<dyn PostRepository>,
    images: ImageUrlBuilder,
}

impl BlogUseCase {
    pub fn new(posts: Arc<dyn PostRepository>, images: ImageUrlBuilder) -> Self {
        Self { posts, images }
    }

    /// Published posts, newest first. Drafts and future-dated posts are dropped
    /// even if the store returns them.
    #[instrument(skip(self))]
    pub async fn list_posts(&self, now: DateTime<Utc>) -> Result<Vec<PostSummary>, DomainError> {
        let mut posts = self.posts.published_posts().await?;
        posts.retain(|post| post.is_published(now));
        // Only advertise posts the detail route can serve.
        posts.retain(|post| {
            let fetchable = Slug::new(post.slug.clone()).is_ok();
            if !fetchable {
                debug!(post_id = %post.id, "Skipping post with unusable slug");
            }
            fetchable
        });
        posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        Ok(posts.iter().map(|post| self.summary(post)).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_post(&self, slug: &str) -> Result<PostDetail, DomainError> {
        let slug = Slug::new(slug.to_string())
            .map_err(|_| DomainError::ValidationError(format!("Invalid post slug: {}", slug)))?;
        let post = self
            .posts
            .post_by_slug(&slug)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("post {}", slug.as_str())))?;

        let summary = self.summary(&post);
        Ok(PostDetail {
            id: summary.id,
            slug: summary.slug,
            title: summary.title,
            excerpt: summary.excerpt,
            published_at: summary.published_at,
            created_at: post.created_at,
            author: summary.author,
            image_url: summary.image_url,
            image_alt: summary.image_alt,
            tags: summary.tags,
            body_html: portable_text::render_html(&post.body, &self.images),
            body_text: portable_text::to_plain_text(&post.body),
        })
    }

    fn summary(&self, post: &Post) -> PostSummary {
        let title = post.display_title().to_string();
        PostSummary {
            id: post.id.clone(),
            slug: post.slug.clone(),
            excerpt: post.excerpt.clone().unwrap_or_default(),
            published_at: post.published_at,
            author: post.author.as_ref().and_then(|author| self.author(author)),
            image_url: post
                .main_image
                .as_ref()
                .and_then(|image| self.images.url(image, Some(MAIN_IMAGE_WIDTH))),
            image_alt: post
                .main_image
                .as_ref()
                .and_then(|image| image.alt.clone())
                .unwrap_or_else(|| title.clone()),
            tags: post.tags.clone(),
            title,
        }
    }

    fn author(&self, author: &Author) -> Option<AuthorSummary> {
        let name = author.name.as_deref()?.trim();
        if name.is_empty() {
            return None;
        }
        Some(AuthorSummary {
            name: name.to_string(),
            slug: author.slug.clone(),
            image_url: author
                .image
                .as_ref()
                .and_then(|image| self.images.url(image, Some(AUTHOR_IMAGE_WIDTH))),
        })
    }
}
