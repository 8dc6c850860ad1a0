use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user in the current session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// Session references a user that no longer exists in the database.
    ///
    /// Results in a 401 Unauthorized response so the client re-authenticates.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(String),

    /// Authenticated user lacks the permission required by the endpoint.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {0} denied access: {1}")]
    AccessDenied(String, String),

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the OAuth callback URL does not match the token stored
    /// in the session, indicating a potential CSRF attack or an invalid callback request.
    /// Results in a 400 Bad Request response.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// No Discord access token stored in the session.
    ///
    /// Endpoints that call Discord on the user's behalf require the token saved
    /// during the OAuth callback. Results in a 401 Unauthorized response.
    #[error("No Discord access token in session")]
    MissingAccessToken,

    /// OAuth authorization code exchange with Discord failed.
    ///
    /// Results in a 500 Internal Server Error with a generic message; the
    /// underlying provider error is logged server-side.
    #[error("OAuth token exchange failed: {0}")]
    TokenExchange(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Session and token problems map to 401 so the client can restart the login flow,
/// permission problems map to 403, and CSRF mismatches map to 400. Client-facing
/// messages stay generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession | Self::MissingAccessToken => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("Authentication required")),
            )
                .into_response(),
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!("Session user {} missing from database", user_id);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto::new("Authentication required")),
                )
                    .into_response()
            }
            Self::AccessDenied(user_id, reason) => {
                tracing::debug!("User {} denied access: {}", user_id, reason);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto::new("Access denied")),
                )
                    .into_response()
            }
            Self::CsrfValidationFailed => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::new(
                    "There was an issue logging you in, please try again.",
                )),
            )
                .into_response(),
            Self::TokenExchange(detail) => {
                tracing::error!("OAuth token exchange failed: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto::new("Internal server error")),
                )
                    .into_response()
            }
        }
    }
}
