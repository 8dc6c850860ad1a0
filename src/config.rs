use crate::error::{config::ConfigError, AppError};

const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";

const DEFAULT_SUPPORT_URL: &str = "https://discord.gg/nyxara";
const DEFAULT_DOCS_URL: &str = "https://docs.nyxara.app";

pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub app_url: String,

    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_redirect_url: String,

    pub discord_auth_url: String,
    pub discord_token_url: String,

    pub bot_api_url: String,
    pub bot_api_key: Option<String>,

    pub invite_url: String,
    pub support_url: String,
    pub docs_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let discord_client_id = std::env::var("DISCORD_CLIENT_ID")
            .map_err(|_| ConfigError::MissingEnvVar("DISCORD_CLIENT_ID".to_string()))?;

        // Marketing short-link targets. The invite default is the standard bot
        // authorization URL for this application.
        let invite_url = std::env::var("INVITE_URL").unwrap_or_else(|_| {
            format!(
                "https://discord.com/oauth2/authorize?client_id={}&permissions=8&scope=bot+applications.commands",
                discord_client_id
            )
        });
        let support_url =
            std::env::var("SUPPORT_URL").unwrap_or_else(|_| DEFAULT_SUPPORT_URL.to_string());
        let docs_url = std::env::var("DOCS_URL").unwrap_or_else(|_| DEFAULT_DOCS_URL.to_string());

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string()),
            app_url: std::env::var("APP_URL")
                .map_err(|_| ConfigError::MissingEnvVar("APP_URL".to_string()))?,
            discord_client_id,
            discord_client_secret: std::env::var("DISCORD_CLIENT_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_CLIENT_SECRET".to_string()))?,
            discord_redirect_url: std::env::var("DISCORD_REDIRECT_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_REDIRECT_URL".to_string()))?,
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            discord_token_url: DISCORD_TOKEN_URL.to_string(),
            bot_api_url: std::env::var("BOT_API_URL")
                .map_err(|_| ConfigError::MissingEnvVar("BOT_API_URL".to_string()))?,
            bot_api_key: std::env::var("BOT_API_KEY").ok(),
            invite_url,
            support_url,
            docs_url,
        })
    }
}
