use crate::application::{
    list_comments::{
        dto::{CommentsQuery, CommentsResponse},
        use_case::ListCommentsUseCase,
    },
    submit_comment::{
        dto::{SubmitCommentRequest, SubmitCommentResponse},
        use_case::SubmitCommentUseCase,
    },
};
use crate::presentation::http::{errors::AppError, state::AppState};
use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::HeaderMap,
};

fn extract_client_ip(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.split(',').next())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .or_else(|| {
            headers
                .get("x-real-ip")
                .and_then(|v| v.to_str().ok())
                .map(str::trim)
                .filter(|s| !s.is_empty())
        })
        .map(str::to_string)
}

pub async fn submit_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<SubmitCommentRequest>, JsonRejection>,
) -> Result<Json<SubmitCommentResponse>, AppError> {
    let Json(request) = payload?;
    let use_case = SubmitCommentUseCase::new(state.comment_repo.clone(), state.verifier.clone());
    let response = use_case
        .execute(request, extract_client_ip(&headers))
        .await?;
    Ok(Json(response))
}

pub async fn list_comments(
    State(state): State<AppState>,
    query: Result<Query<CommentsQuery>, QueryRejection>,
) -> Result<Json<CommentsResponse>, AppError> {
    let Query(query) = query?;
    let comments = ListCommentsUseCase::new(state.comment_repo.clone())
        .execute(query.post_id.as_deref())
        .await?;
    Ok(Json(CommentsResponse { comments }))
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed { allow: "GET, POST" }
}
