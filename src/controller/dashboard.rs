use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::auth::AuthGuard,
    model::{
        api::{ApiEnvelope, ErrorDto},
        dashboard::DashboardDto,
    },
    service::dashboard::DashboardService,
    state::AppState,
};

/// Tag for grouping dashboard endpoints in OpenAPI documentation
pub static DASHBOARD_TAG: &str = "dashboard";

/// Get the admin dashboard overview.
///
/// Combines the authenticated user's profile with live bot telemetry. Unlike
/// the public stats route there is no simulated fallback here; a bot API
/// failure is reported as a 500 with code `DASHBOARD_FETCH_ERROR` so the admin
/// sees the outage.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - Dashboard payload
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Bot API unreachable, code `DASHBOARD_FETCH_ERROR`
#[utoipa::path(
    get,
    path = "/api/dashboard",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Dashboard payload", body = ApiEnvelope<DashboardDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Bot API unreachable", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = DashboardService::new(&state.bot_api);

    let dashboard = match service.overview(user).await {
        Ok(dashboard) => dashboard,
        Err(err) => {
            tracing::error!("Dashboard fetch failed: {}", err);
            return Ok((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorDto::with_code(
                    "Failed to fetch dashboard data",
                    "DASHBOARD_FETCH_ERROR",
                )),
            )
                .into_response());
        }
    };

    Ok((StatusCode::OK, Json(ApiEnvelope::ok(dashboard))).into_response())
}
