use crate::application::blog::{
    dto::{PostDetail, PostsResponse},
    use_case::BlogUseCase,
};
use crate::domain::post::image::ImageUrlBuilder;
use crate::presentation::http::{errors::AppError, state::AppState};
use axum::{
    Json,
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};
use chrono::Utc;

const BLOG_CACHE_CONTROL: &str = "public, max-age=60";

fn blog_use_case(state: &AppState) -> BlogUseCase {
    BlogUseCase::new(
        state.post_repo.clone(),
        ImageUrlBuilder::new(&state.config.sanity_project_id, &state.config.sanity_dataset),
    )
}

pub async fn list_posts(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let posts = blog_use_case(&state).list_posts(Utc::now()).await?;
    Ok((
        [(header::CACHE_CONTROL, BLOG_CACHE_CONTROL)],
        Json(PostsResponse { posts }),
    ))
}

pub async fn get_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let post: PostDetail = blog_use_case(&state).get_post(&slug).await?;
    Ok(([(header::CACHE_CONTROL, BLOG_CACHE_CONTROL)], Json(post)))
}
