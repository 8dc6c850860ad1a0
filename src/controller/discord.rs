use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    error::{auth::AuthError, AppError},
    middleware::{auth::AuthGuard, session::AuthSession},
    model::{
        api::{ApiEnvelope, ErrorDto},
        discord::DiscordGuildDto,
    },
    service::discord::DiscordService,
    state::AppState,
};

/// Tag for grouping Discord endpoints in OpenAPI documentation
pub static DISCORD_TAG: &str = "discord";

/// List the logged-in user's Discord guilds.
///
/// Calls Discord's `users/@me/guilds` endpoint with the OAuth access token
/// stored in the session at login. Sessions created before the `guilds` scope
/// was requested have no stored token and get a 401 asking for re-login.
///
/// # Access Control
/// - Any authenticated user with a stored access token
///
/// # Returns
/// - `200 OK` - The user's guilds
/// - `401 Unauthorized` - Not authenticated, or no access token in session
/// - `500 Internal Server Error` - Discord API error
#[utoipa::path(
    get,
    path = "/api/discord/guilds",
    tag = DISCORD_TAG,
    responses(
        (status = 200, description = "The user's guilds", body = ApiEnvelope<Vec<DiscordGuildDto>>),
        (status = 401, description = "Not authenticated or token missing", body = ErrorDto),
        (status = 500, description = "Discord API error", body = ErrorDto)
    ),
)]
pub async fn list_guilds(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let Some(access_token) = AuthSession::new(&session).get_access_token().await? else {
        return Err(AuthError::MissingAccessToken.into());
    };

    let service = DiscordService::new(&state.http_client);

    let guilds = service.user_guilds(&access_token).await?;

    Ok((StatusCode::OK, Json(ApiEnvelope::ok(guilds))))
}
