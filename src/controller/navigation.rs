use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    error::AppError,
    model::{
        api::{ApiEnvelope, ApiMeta, ErrorDto},
        navigation::NavigationItemDto,
    },
    service::navigation::NavigationService,
    state::AppState,
};

/// Tag for grouping navigation endpoints in OpenAPI documentation
pub static NAVIGATION_TAG: &str = "navigation";

/// Get the site navigation tree.
///
/// Top-level items carry one level of children. When the database is
/// unavailable the static fallback navigation is served instead and
/// `meta.source` is set to `fallback`.
///
/// # Returns
/// - `200 OK` - Navigation items, from the database or the fallback set
#[utoipa::path(
    get,
    path = "/api/navigation",
    tag = NAVIGATION_TAG,
    responses(
        (status = 200, description = "Navigation items", body = ApiEnvelope<Vec<NavigationItemDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_navigation(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = NavigationService::new(&state.db);

    let (items, source) = service.items().await;

    Ok((
        StatusCode::OK,
        Json(ApiEnvelope::ok_with_meta(items, ApiMeta::source(source))),
    ))
}
