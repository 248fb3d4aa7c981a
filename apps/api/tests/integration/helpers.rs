use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use mosaic_api::{
    config::Config,
    domain::{
        comment::{
            entity::{Comment, NewComment},
            repository::CommentRepository,
        },
        post::{
            entity::{Post, Slug},
            repository::PostRepository,
        },
        shared::errors::DomainError,
    },
    infrastructure::verification::traits::{
        HumanVerifier, VerificationOutcome, VerificationRequest,
    },
    presentation::http::{routes::create_router, state::AppState},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

pub const VALID_TOKEN: &str = "valid";

/// Holds comments in memory. Reads return every stored comment so the
/// visibility rules in the service are what decides what callers see.
#[derive(Default)]
pub struct FakeCommentRepository {
    pub stored: Mutex<Vec<Comment>>,
    pub created: Mutex<Vec<NewComment>>,
    pub fail: bool,
}

#[async_trait]
impl CommentRepository for FakeCommentRepository {
    async fn create_comment(&self, comment: &NewComment) -> Result<String, DomainError> {
        if self.fail {
            return Err(DomainError::InfrastructureError(
                "content store returned 503".into(),
            ));
        }
        let mut created = self.created.lock().unwrap();
        created.push(comment.clone());
        Ok(format!("comment-{}", created.len()))
    }

    async fn approved_comments(&self, _post_id: &str) -> Result<Vec<Comment>, DomainError> {
        if self.fail {
            return Err(DomainError::InfrastructureError(
                "content store returned 503".into(),
            ));
        }
        Ok(self.stored.lock().unwrap().clone())
    }
}

/// Accepts exactly [`VALID_TOKEN`] and records every request it sees.
#[derive(Default)]
pub struct FakeVerifier {
    pub calls: Mutex<Vec<VerificationRequest>>,
}

#[async_trait]
impl HumanVerifier for FakeVerifier {
    async fn verify(
        &self,
        request: &VerificationRequest,
    ) -> Result<VerificationOutcome, DomainError> {
        self.calls.lock().unwrap().push(request.clone());
        if request.token == VALID_TOKEN {
            Ok(VerificationOutcome {
                success: true,
                error_codes: vec![],
            })
        } else {
            Ok(VerificationOutcome {
                success: false,
                error_codes: vec!["invalid-input-response".into()],
            })
        }
    }
}

#[derive(Default)]
pub struct FakePostRepository {
    pub posts: Vec<Post>,
}

#[async_trait]
impl PostRepository for FakePostRepository {
    async fn published_posts(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.clone())
    }

    async fn post_by_slug(&self, slug: &Slug) -> Result<Option<Post>, DomainError> {
        Ok(self
            .posts
            .iter()
            .find(|post| post.slug == slug.as_str())
            .cloned())
    }
}

pub fn test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        allowed_origins: vec![],
        sanity_project_id: "proj".to_string(),
        sanity_dataset: "production".to_string(),
        sanity_api_token: "sk-test".to_string(),
        sanity_api_version: "2023-05-03".to_string(),
        sanity_use_cdn: true,
        sanity_api_url: None,
        hcaptcha_secret_key: "0x-test-secret".to_string(),
        hcaptcha_site_key: None,
        hcaptcha_verify_url: "https://hcaptcha.invalid/siteverify".to_string(),
        upstream_timeout_seconds: 5,
    }
}

pub struct TestApp {
    pub app: Router,
    pub comments: Arc<FakeCommentRepository>,
    pub verifier: Arc<FakeVerifier>,
}

pub fn spawn_app_with(comments: FakeCommentRepository, posts: FakePostRepository) -> TestApp {
    let comments = Arc::new(comments);
    let verifier = Arc::new(FakeVerifier::default());
    let state = AppState {
        config: Arc::new(test_config()),
        comment_repo: comments.clone(),
        post_repo: Arc::new(posts),
        verifier: verifier.clone(),
    };

    TestApp {
        app: create_router(state),
        comments,
        verifier,
    }
}

pub fn spawn_app() -> TestApp {
    spawn_app_with(FakeCommentRepository::default(), FakePostRepository::default())
}

pub async fn send(app: &Router, req: Request<Body>) -> axum::response::Response {
    app.clone().oneshot(req).await.expect("request failed")
}

pub async fn read_json<T: DeserializeOwned>(res: axum::response::Response) -> T {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    serde_json::from_slice(&bytes).expect("failed to parse json")
}

pub async fn read_text(res: axum::response::Response) -> String {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    String::from_utf8(bytes.to_vec()).expect("invalid utf8")
}

pub async fn expect_status(
    res: axum::response::Response,
    expected: StatusCode,
) -> axum::response::Response {
    let actual = res.status();

    if actual == expected {
        return res;
    }

    let body = read_text(res).await;
    panic!(
        "HTTP status mismatch. Expected {}, got {}. Response body: {}",
        expected, actual, body
    );
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request")
}

pub fn comment(id: &str, post_id: &str, created_at: &str, approved: bool) -> Comment {
    serde_json::from_value(serde_json::json!({
        "_id": id,
        "postId": post_id,
        "authorName": format!("Author of {}", id),
        "commentText": format!("Text of {}", id),
        "createdAt": created_at,
        "approved": approved,
    }))
    .expect("invalid comment fixture")
}
