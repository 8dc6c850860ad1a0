use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    error::AppError,
    model::{
        api::{ApiEnvelope, ErrorDto},
        faq::FaqEntryDto,
    },
    service::faq::FaqService,
    state::AppState,
};

/// Tag for grouping FAQ endpoints in OpenAPI documentation
pub static FAQ_TAG: &str = "faq";

#[derive(Deserialize)]
pub struct FaqListParams {
    pub search: Option<String>,
}

/// List published FAQ entries.
///
/// Entries are ordered by their configured sort order. The optional search term
/// matches case-insensitively against question and answer text.
///
/// # Returns
/// - `200 OK` - Published FAQ entries
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/faq",
    tag = FAQ_TAG,
    params(
        ("search" = Option<String>, Query, description = "Case-insensitive match on question and answer")
    ),
    responses(
        (status = 200, description = "Published FAQ entries", body = ApiEnvelope<Vec<FaqEntryDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_entries(
    State(state): State<AppState>,
    Query(params): Query<FaqListParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = FaqService::new(&state.db);

    let entries = service.list(params.search.as_deref()).await?;

    Ok((StatusCode::OK, Json(ApiEnvelope::ok(entries))))
}
