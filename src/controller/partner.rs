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
        partner::PartnerDto,
    },
    service::partner::PartnerService,
    state::AppState,
};

/// Tag for grouping partner endpoints in OpenAPI documentation
pub static PARTNER_TAG: &str = "partners";

#[derive(Deserialize)]
pub struct PartnerListParams {
    pub tier: Option<String>,
}

/// List active partners.
///
/// # Returns
/// - `200 OK` - Active partners, optionally restricted to one tier
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/partners",
    tag = PARTNER_TAG,
    params(
        ("tier" = Option<String>, Query, description = "Restrict to one partner tier")
    ),
    responses(
        (status = 200, description = "Active partners", body = ApiEnvelope<Vec<PartnerDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_partners(
    State(state): State<AppState>,
    Query(params): Query<PartnerListParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = PartnerService::new(&state.db);

    let partners = service.list(params.tier.as_deref()).await?;

    Ok((StatusCode::OK, Json(ApiEnvelope::ok(partners))))
}
