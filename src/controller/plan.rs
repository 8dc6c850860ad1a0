use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    error::AppError,
    model::{
        api::{ApiEnvelope, ApiMeta, ErrorDto},
        plan::PricingPlanDto,
    },
    service::plan::PlanService,
    state::AppState,
};

/// Tag for grouping pricing endpoints in OpenAPI documentation
pub static PLAN_TAG: &str = "plans";

/// List pricing plans.
///
/// When the database is unavailable the static fallback plan set is served
/// instead and `meta.source` is set to `fallback`, so this route does not fail
/// during an outage.
///
/// # Returns
/// - `200 OK` - Pricing plans, from the database or the fallback set
#[utoipa::path(
    get,
    path = "/api/plans",
    tag = PLAN_TAG,
    responses(
        (status = 200, description = "Pricing plans", body = ApiEnvelope<Vec<PricingPlanDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_plans(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = PlanService::new(&state.db);

    let (plans, source) = service.list().await;

    Ok((
        StatusCode::OK,
        Json(ApiEnvelope::ok_with_meta(plans, ApiMeta::source(source))),
    ))
}
