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
        testimonial::TestimonialDto,
    },
    service::testimonial::TestimonialService,
    state::AppState,
};

/// Tag for grouping testimonial endpoints in OpenAPI documentation
pub static TESTIMONIAL_TAG: &str = "testimonials";

#[derive(Deserialize)]
pub struct TestimonialListParams {
    pub featured: Option<bool>,
}

/// List testimonials.
///
/// # Returns
/// - `200 OK` - Testimonials, optionally only the featured ones
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/testimonials",
    tag = TESTIMONIAL_TAG,
    params(
        ("featured" = Option<bool>, Query, description = "Only return featured testimonials")
    ),
    responses(
        (status = 200, description = "Testimonials", body = ApiEnvelope<Vec<TestimonialDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_testimonials(
    State(state): State<AppState>,
    Query(params): Query<TestimonialListParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = TestimonialService::new(&state.db);

    let testimonials = service.list(params.featured).await?;

    Ok((StatusCode::OK, Json(ApiEnvelope::ok(testimonials))))
}
