use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    error::AppError,
    model::{
        api::{ApiEnvelope, ErrorDto},
        team::DepartmentDto,
    },
    service::team::TeamService,
    state::AppState,
};

/// Tag for grouping team endpoints in OpenAPI documentation
pub static TEAM_TAG: &str = "team";

/// List team members grouped by department.
///
/// Departments and their members are both returned in configured sort order.
/// Inactive members are omitted; departments with no active members still
/// appear, empty.
///
/// # Returns
/// - `200 OK` - Departments with their active members
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/team",
    tag = TEAM_TAG,
    responses(
        (status = 200, description = "Departments with their active members", body = ApiEnvelope<Vec<DepartmentDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_team(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = TeamService::new(&state.db);

    let departments = service.departments().await?;

    Ok((StatusCode::OK, Json(ApiEnvelope::ok(departments))))
}
