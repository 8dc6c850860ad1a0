//! Marketing short-links and the bot API pass-through.

use axum::{
    extract::{Path, RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};

use crate::{error::AppError, state::AppState};

/// `GET /invite` - permanent redirect to the bot authorization URL.
pub async fn invite(State(state): State<AppState>) -> impl IntoResponse {
    Redirect::permanent(&state.redirects.invite)
}

/// `GET /support` - permanent redirect to the support server.
pub async fn support(State(state): State<AppState>) -> impl IntoResponse {
    Redirect::permanent(&state.redirects.support)
}

/// `GET /docs` - permanent redirect to the documentation site.
pub async fn docs(State(state): State<AppState>) -> impl IntoResponse {
    Redirect::permanent(&state.redirects.docs)
}

/// `GET /bot-api/{*path}` - pass-through proxy to the remote bot API.
///
/// The upstream's status code and JSON body are relayed as-is; the query
/// string is forwarded unchanged. The bot API key never leaves the server,
/// which is the point of proxying instead of exposing the bot API directly.
pub async fn bot_api_proxy(
    State(state): State<AppState>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
) -> Result<impl IntoResponse, AppError> {
    let (status, body) = state.bot_api.proxy_get(&path, query.as_deref()).await?;

    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);

    Ok((status, Json(body)))
}
