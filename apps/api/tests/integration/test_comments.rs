use super::helpers::{
    FakeCommentRepository, FakePostRepository, comment, expect_status, get, json_request,
    read_json, send, spawn_app, spawn_app_with,
};
use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};

fn submission() -> Value {
    json!({
        "postId": "p1",
        "authorName": "Alice",
        "commentText": "Great post!",
        "verificationToken": "valid"
    })
}

#[tokio::test]
async fn submits_comment_for_moderation() {
    let app = spawn_app();

    let req = Request::builder()
        .method("POST")
        .uri("/api/v1/comments")
        .header(header::CONTENT_TYPE, "application/json")
        .header("x-forwarded-for", "203.0.113.9, 10.0.0.1")
        .body(Body::from(submission().to_string()))
        .expect("failed to build request");
    let res = expect_status(send(&app.app, req).await, StatusCode::OK).await;
    assert!(res.headers().contains_key("x-request-id"));

    let body: Value = read_json(res).await;
    assert_eq!(body["message"], "Comment submitted successfully for moderation!");
    assert_eq!(body["commentId"], "comment-1");

    let created = app.comments.created.lock().unwrap();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].post().as_str(), "p1");
    assert_eq!(created[0].author_name().as_str(), "Alice");
    assert_eq!(created[0].comment_text().as_str(), "Great post!");
    assert!(created[0].author_email().is_none());
    assert!(!created[0].approved());

    let calls = app.verifier.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].token, "valid");
    assert_eq!(calls[0].remote_ip.as_deref(), Some("203.0.113.9"));
}

#[tokio::test]
async fn accepts_legacy_token_field_and_optional_email() {
    let app = spawn_app();

    let body = json!({
        "postId": "p1",
        "authorName": "Bob",
        "authorEmail": "bob@example.com",
        "commentText": "Thanks",
        "hCaptchaToken": "valid"
    });
    expect_status(
        send(&app.app, json_request("POST", "/api/v1/comments", &body)).await,
        StatusCode::OK,
    )
    .await;

    let created = app.comments.created.lock().unwrap();
    assert_eq!(
        created[0].author_email().map(|email| email.as_str()),
        Some("bob@example.com")
    );
}

#[tokio::test]
async fn rejects_missing_fields_before_verification() {
    let app = spawn_app();

    let mut body = submission();
    body["commentText"] = json!("   ");
    let res = expect_status(
        send(&app.app, json_request("POST", "/api/v1/comments", &body)).await,
        StatusCode::BAD_REQUEST,
    )
    .await;

    let payload: Value = read_json(res).await;
    assert_eq!(payload["message"], "Missing required fields: commentText");
    assert!(app.verifier.calls.lock().unwrap().is_empty());
    assert!(app.comments.created.lock().unwrap().is_empty());
}

#[tokio::test]
async fn rejects_invalid_email_and_overlong_name() {
    let app = spawn_app();

    let mut body = submission();
    body["authorEmail"] = json!("not-an-email");
    body["authorName"] = json!("x".repeat(81));
    let res = expect_status(
        send(&app.app, json_request("POST", "/api/v1/comments", &body)).await,
        StatusCode::BAD_REQUEST,
    )
    .await;

    let payload: Value = read_json(res).await;
    assert_eq!(payload["message"], "Invalid fields: authorName, authorEmail");
    assert!(app.comments.created.lock().unwrap().is_empty());
}

#[tokio::test]
async fn rejects_failed_verification_without_storing() {
    let app = spawn_app();

    let mut body = submission();
    body["verificationToken"] = json!("forged");
    let res = expect_status(
        send(&app.app, json_request("POST", "/api/v1/comments", &body)).await,
        StatusCode::BAD_REQUEST,
    )
    .await;

    let payload: Value = read_json(res).await;
    assert_eq!(payload["message"], "Verification failed. Please try again.");
    assert_eq!(app.verifier.calls.lock().unwrap().len(), 1);
    assert!(app.comments.created.lock().unwrap().is_empty());
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let app = spawn_app();

    let req = Request::builder()
        .method("POST")
        .uri("/api/v1/comments")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"postId\": "))
        .expect("failed to build request");
    let res = expect_status(send(&app.app, req).await, StatusCode::BAD_REQUEST).await;

    let payload: Value = read_json(res).await;
    assert!(
        payload["message"]
            .as_str()
            .is_some_and(|message| message.starts_with("Invalid request body")),
        "unexpected message: {}",
        payload["message"]
    );
}

#[tokio::test]
async fn store_failure_is_an_opaque_server_error() {
    let app = spawn_app_with(
        FakeCommentRepository {
            fail: true,
            ..Default::default()
        },
        FakePostRepository::default(),
    );

    let res = expect_status(
        send(
            &app.app,
            json_request("POST", "/api/v1/comments", &submission()),
        )
        .await,
        StatusCode::INTERNAL_SERVER_ERROR,
    )
    .await;

    let payload: Value = read_json(res).await;
    assert_eq!(payload, json!({ "message": "Internal server error." }));
}

#[tokio::test]
async fn other_methods_are_not_allowed() {
    let app = spawn_app();

    for method in ["PUT", "DELETE", "PATCH"] {
        let res = expect_status(
            send(&app.app, json_request(method, "/api/v1/comments", &submission())).await,
            StatusCode::METHOD_NOT_ALLOWED,
        )
        .await;
        assert_eq!(res.headers()[header::ALLOW], "GET, POST");

        let payload: Value = read_json(res).await;
        assert_eq!(payload["message"], "Method Not Allowed");
    }
    assert!(app.comments.created.lock().unwrap().is_empty());
}

#[tokio::test]
async fn lists_only_approved_comments_oldest_first() {
    let repo = FakeCommentRepository::default();
    repo.stored.lock().unwrap().extend([
        comment("c3", "p1", "2024-03-03T00:00:00Z", true),
        comment("c1", "p1", "2024-03-01T00:00:00Z", true),
        comment("c2", "p1", "2024-03-02T00:00:00Z", false),
        comment("c4", "p2", "2024-03-01T00:00:00Z", true),
    ]);
    let app = spawn_app_with(repo, FakePostRepository::default());

    let res = expect_status(
        send(&app.app, get("/api/v1/comments?postId=p1")).await,
        StatusCode::OK,
    )
    .await;
    let payload: Value = read_json(res).await;
    let comments = payload["comments"].as_array().expect("comments array");

    let ids: Vec<&str> = comments
        .iter()
        .map(|comment| comment["id"].as_str().unwrap_or_default())
        .collect();
    assert_eq!(ids, vec!["c1", "c3"]);
    assert_eq!(comments[0]["authorName"], "Author of c1");
    assert!(comments[0].get("authorEmail").is_none());
    assert!(comments[0].get("approved").is_none());
}

#[tokio::test]
async fn listing_requires_a_post_id() {
    let app = spawn_app();

    let res = expect_status(
        send(&app.app, get("/api/v1/comments")).await,
        StatusCode::BAD_REQUEST,
    )
    .await;
    let payload: Value = read_json(res).await;
    assert_eq!(payload["message"], "Missing required fields: postId");

    let res = expect_status(
        send(
            &app.app,
            get(&format!("/api/v1/comments?postId={}", "p".repeat(129))),
        )
        .await,
        StatusCode::BAD_REQUEST,
    )
    .await;
    let payload: Value = read_json(res).await;
    assert_eq!(payload["message"], "Invalid fields: postId");
}

#[tokio::test]
async fn health_reports_version() {
    let app = spawn_app();

    let res = expect_status(send(&app.app, get("/health")).await, StatusCode::OK).await;
    let payload: Value = read_json(res).await;
    assert_eq!(payload["status"], "healthy");
    assert_eq!(payload["version"], env!("CARGO_PKG_VERSION"));
}
