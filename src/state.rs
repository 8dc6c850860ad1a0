//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;

use crate::service::bot_api::BotApiClient;

/// Type alias for the OAuth2 client configured for Discord authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
/// - `OAuth2Client` is designed to be cloned
/// - `BotApiClient` wraps a `reqwest::Client` plus owned strings
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for making external API requests.
    ///
    /// Configured with security settings (no redirects) to prevent SSRF
    /// vulnerabilities. Used for Discord API calls and other external services.
    pub http_client: reqwest::Client,

    /// OAuth2 client for Discord authentication flow.
    pub oauth_client: OAuth2Client,

    /// Client for the remote bot control API (health, shards, guild search).
    pub bot_api: BotApiClient,

    /// Application base URL for generating links and post-login redirects.
    pub app_url: String,

    /// Targets for the marketing short-link redirects.
    pub redirects: RedirectTargets,
}

/// Destination URLs for the `/invite`, `/support`, and `/docs` short links.
#[derive(Clone)]
pub struct RedirectTargets {
    pub invite: String,
    pub support: String,
    pub docs: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// This constructor is called once during server startup after all
    /// dependencies have been initialized. The resulting state is then
    /// provided to the Axum router for use in request handlers.
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        bot_api: BotApiClient,
        app_url: String,
        redirects: RedirectTargets,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            bot_api,
            app_url,
            redirects,
        }
    }
}
