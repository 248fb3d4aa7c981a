use super::{
    handlers::{blog, comments, health},
    middleware::request_id::request_id_middleware,
    state::AppState,
};
use axum::{Router, middleware, routing::get};
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Comments: GET reads approved comments, POST submits one for moderation
        .route(
            "/api/v1/comments",
            get(comments::list_comments)
                .post(comments::submit_comment)
                .fallback(comments::method_not_allowed),
        )
        // Blog
        .route("/api/v1/posts", get(blog::list_posts))
        .route("/api/v1/posts/{slug}", get(blog::get_post))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
