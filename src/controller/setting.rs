use std::collections::BTreeMap;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::{
        api::{ApiEnvelope, ErrorDto},
        setting::{SettingDto, UpdateSettingDto},
    },
    service::setting::{SettingService, UpdateSettingParams},
    state::AppState,
};

/// Tag for grouping settings endpoints in OpenAPI documentation
pub static SETTING_TAG: &str = "settings";

/// Query parameters for reading settings.
#[derive(Deserialize)]
pub struct GetSettingsParams {
    /// Return only the setting with this key.
    pub key: Option<String>,
}

/// Get all site settings as a key/value map, or a single setting by key.
///
/// Reads are public; the front end uses them to render the site chrome. Only
/// writes require an admin session.
///
/// # Returns
/// - `200 OK` - All settings, or the requested setting
/// - `404 Not Found` - No setting with the requested key
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/settings",
    tag = SETTING_TAG,
    params(
        ("key" = Option<String>, Query, description = "Return only the setting with this key")
    ),
    responses(
        (status = 200, description = "All settings", body = ApiEnvelope<BTreeMap<String, String>>),
        (status = 404, description = "No setting with the requested key", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_settings(
    State(state): State<AppState>,
    Query(params): Query<GetSettingsParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = SettingService::new(&state.db);

    if let Some(key) = params.key {
        let setting = service
            .get(&key)
            .await?
            .ok_or_else(|| AppError::NotFound("Setting not found".to_string()))?;

        return Ok((StatusCode::OK, Json(ApiEnvelope::ok(setting))).into_response());
    }

    let settings = service.all().await?;

    Ok((StatusCode::OK, Json(ApiEnvelope::ok(settings))).into_response())
}

/// Create or update a site setting.
///
/// A missing or empty `key` is rejected with 400 before the auth guard runs,
/// so the request-shape contract holds regardless of session state.
///
/// # Access Control
/// - `Admin` - Only admins can write settings
///
/// # Returns
/// - `200 OK` - The stored setting
/// - `400 Bad Request` - Missing key parameter
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/settings",
    tag = SETTING_TAG,
    request_body = UpdateSettingDto,
    responses(
        (status = 200, description = "The stored setting", body = ApiEnvelope<SettingDto>),
        (status = 400, description = "Missing key parameter", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_setting(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateSettingDto>,
) -> Result<impl IntoResponse, AppError> {
    if payload.key.as_deref().unwrap_or("").is_empty() {
        return Err(AppError::BadRequest("Missing key parameter".to_string()));
    }

    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = SettingService::new(&state.db);

    let setting = service
        .update(UpdateSettingParams {
            key: payload.key,
            value: payload.value,
        })
        .await?;

    Ok((StatusCode::OK, Json(ApiEnvelope::ok(setting))))
}
