//! Type-safe session management wrappers.
//!
//! This module provides type-safe interfaces for managing different aspects of user
//! sessions, organized by concern. Each struct wraps the same underlying `Session`
//! but exposes only the methods relevant to its concern, preventing typos in session
//! keys and centralizing session-related logic.
//!
//! - `AuthSession` - Authentication state (user's Discord ID, OAuth access token)
//! - `CsrfSession` - CSRF token management for the OAuth flow

use tower_sessions::Session;

use crate::error::AppError;

// Session key constants
const SESSION_AUTH_USER_ID: &str = "auth:user";
const SESSION_AUTH_ACCESS_TOKEN: &str = "auth:access_token";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";

/// Authentication session management.
///
/// Stores the authenticated user's Discord ID and the Discord OAuth access token
/// used for on-behalf-of API calls such as listing the user's guilds.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's Discord ID, establishing a logged-in session.
    pub async fn set_user_id(&self, discord_id: &str) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_USER_ID, discord_id.to_string())
            .await?;
        Ok(())
    }

    /// Retrieves the user's Discord ID.
    ///
    /// # Returns
    /// - `Ok(Some(discord_id))` - User is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<String>, AppError> {
        let user_id = self.session.get::<String>(SESSION_AUTH_USER_ID).await?;
        Ok(user_id)
    }

    /// Stores the Discord OAuth access token obtained during the callback.
    pub async fn set_access_token(&self, token: &str) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_ACCESS_TOKEN, token.to_string())
            .await?;
        Ok(())
    }

    /// Retrieves the Discord OAuth access token, if any.
    pub async fn get_access_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.get::<String>(SESSION_AUTH_ACCESS_TOKEN).await?;
        Ok(token)
    }

    /// Clears all data from the session. Used during logout.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}

/// CSRF protection session management.
///
/// Tokens are stored during login initiation and validated during the OAuth
/// callback.
pub struct CsrfSession<'a> {
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves and removes the CSRF token.
    ///
    /// The token is removed so each one can only be used once.
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        Ok(token)
    }
}
