use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    data::blog::BlogPostFilter,
    error::AppError,
    model::{
        api::{ApiEnvelope, ErrorDto},
        blog::{BlogCategoryDto, BlogPostDto, BlogPostSummaryDto},
    },
    service::blog::BlogService,
    state::AppState,
};

/// Tag for grouping blog endpoints in OpenAPI documentation
pub static BLOG_TAG: &str = "blog";

#[derive(Deserialize)]
pub struct BlogListParams {
    pub category_id: Option<i32>,
    pub search: Option<String>,
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    9
}

/// List published blog posts.
///
/// Returns a page of published posts, newest first, with pagination counters in
/// the envelope's `meta`. Posts can be filtered by category and by a
/// case-insensitive search over title and excerpt.
///
/// # Returns
/// - `200 OK` - Page of published posts
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/blog",
    tag = BLOG_TAG,
    params(
        ("category_id" = Option<i32>, Query, description = "Restrict to one category"),
        ("search" = Option<String>, Query, description = "Case-insensitive match on title and excerpt"),
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("per_page" = Option<u64>, Query, description = "Posts per page (default: 9, max: 50)")
    ),
    responses(
        (status = 200, description = "Page of published posts", body = ApiEnvelope<Vec<BlogPostSummaryDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_posts(
    State(state): State<AppState>,
    Query(params): Query<BlogListParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = BlogService::new(&state.db);

    let filter = BlogPostFilter {
        category_id: params.category_id,
        search: params.search,
        page: params.page.max(1),
        per_page: params.per_page.clamp(1, 50),
    };

    let (posts, meta) = service.list(filter).await?;

    Ok((StatusCode::OK, Json(ApiEnvelope::ok_with_meta(posts, meta))))
}

/// Get a published blog post by slug.
///
/// # Returns
/// - `200 OK` - The full post including body content
/// - `404 Not Found` - No published post with that slug
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/blog/{slug}",
    tag = BLOG_TAG,
    params(
        ("slug" = String, Path, description = "Post slug")
    ),
    responses(
        (status = 200, description = "The full post", body = ApiEnvelope<BlogPostDto>),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = BlogService::new(&state.db);

    let post = service.get_by_slug(&slug).await?;

    match post {
        Some(post) => Ok((StatusCode::OK, Json(ApiEnvelope::ok(post)))),
        None => Err(AppError::NotFound("Post not found".to_string())),
    }
}

/// List blog categories with published-post counts.
///
/// # Returns
/// - `200 OK` - All categories, each with the number of published posts in it
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/blog/categories",
    tag = BLOG_TAG,
    responses(
        (status = 200, description = "All categories with post counts", body = ApiEnvelope<Vec<BlogCategoryDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = BlogService::new(&state.db);

    let categories = service.categories().await?;

    Ok((StatusCode::OK, Json(ApiEnvelope::ok(categories))))
}
