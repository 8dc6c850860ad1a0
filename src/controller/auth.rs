use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::AuthGuard,
        session::{AuthSession, CsrfSession},
    },
    model::{
        api::{ApiEnvelope, ErrorDto},
        user::UserDto,
    },
    service::auth::DiscordAuthService,
    state::AppState,
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Query parameters for the OAuth callback endpoint.
///
/// # Fields
/// - `state` - CSRF protection token that must match the value stored in the session
/// - `code` - Authorization code used to exchange for access tokens
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: String,
    /// Authorization code from Discord SSO for token exchange.
    pub code: String,
}

/// Start the Discord OAuth login flow.
///
/// Stores a fresh CSRF token in the session and redirects to Discord's
/// authorization page.
#[utoipa::path(
    get,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to Discord authorization page"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_service =
        DiscordAuthService::new(&state.db, &state.http_client, &state.oauth_client);

    let (url, csrf_token) = auth_service.login_url();

    // Store CSRF token in session for verification during callback
    CsrfSession::new(&session)
        .set_token(csrf_token.secret().clone())
        .await?;

    Ok(Redirect::temporary(url.as_ref()))
}

/// Complete the Discord OAuth login flow.
///
/// Validates the CSRF state, exchanges the code, upserts the user, stores the
/// user ID and access token in the session, and redirects to the dashboard.
///
/// # Returns
/// - `307 Temporary Redirect` - Login succeeded, redirect to the dashboard
/// - `400 Bad Request` - CSRF validation failed
/// - `500 Internal Server Error` - Token exchange or database error
#[utoipa::path(
    get,
    path = "/api/auth/callback",
    tag = AUTH_TAG,
    params(
        ("state" = String, Query, description = "CSRF state token"),
        ("code" = String, Query, description = "Discord authorization code")
    ),
    responses(
        (status = 307, description = "Redirect to the dashboard"),
        (status = 400, description = "CSRF validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service =
        DiscordAuthService::new(&state.db, &state.http_client, &state.oauth_client);

    validate_csrf(&session, &params.state).await?;

    let (user, access_token) = auth_service.callback(params.code).await?;

    let auth_session = AuthSession::new(&session);
    auth_session.set_user_id(&user.discord_id).await?;
    auth_session.set_access_token(&access_token).await?;

    Ok(Redirect::temporary(&format!("{}/dashboard", state.app_url)))
}

/// Get the logged-in user's profile.
///
/// # Returns
/// - `200 OK` - The authenticated user
/// - `401 Unauthorized` - No user in session
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The authenticated user", body = ApiEnvelope<UserDto>),
        (status = 401, description = "No user in session", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((
        StatusCode::OK,
        Json(ApiEnvelope::ok(UserDto::from_entity(user))),
    ))
}

/// Log out, destroying the session and returning to the home page.
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Session cleared, redirect to the home page"),
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(Redirect::temporary(&state.app_url))
}

async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), AppError> {
    let stored_state = CsrfSession::new(session).take_token().await?;

    if let Some(state) = stored_state {
        if state == csrf_state {
            return Ok(());
        }
    }

    Err(AppError::AuthErr(AuthError::CsrfValidationFailed))
}
