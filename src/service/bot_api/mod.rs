//! Client for the remote bot control API.
//!
//! The bot process exposes a small HTTP control plane (health, shard status,
//! guild search). Each method here is a single request with no retry or backoff;
//! callers decide whether a failure is surfaced or papered over with fallback
//! data.

pub mod fallback;

use serde::Deserialize;

use crate::error::AppError;

/// Health summary from `GET /health` on the bot API.
#[derive(Debug, Clone, Deserialize)]
pub struct BotHealth {
    pub status: String,
    pub uptime_secs: u64,
    pub guilds: u64,
    pub users: u64,
    pub commands_run: u64,
}

/// Shard status from `GET /shards` on the bot API.
#[derive(Debug, Clone, Deserialize)]
pub struct BotShard {
    pub id: u32,
    pub status: String,
    pub latency_ms: u64,
    pub guilds: u64,
}

/// Guild summary from `GET /guilds/search` on the bot API.
#[derive(Debug, Clone, Deserialize)]
pub struct BotGuild {
    pub id: String,
    pub name: String,
    pub icon: Option<String>,
    pub member_count: u64,
    pub shard_id: u32,
}

#[derive(Clone)]
pub struct BotApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl BotApiClient {
    pub fn new(http: reqwest::Client, base_url: String, api_key: Option<String>) -> Self {
        // Trailing slash would double up when joining paths
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            api_key,
        }
    }

    fn request(&self, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self.http.get(format!("{}{}", self.base_url, path));
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }
        builder
    }

    pub async fn health(&self) -> Result<BotHealth, AppError> {
        let health = self
            .request("/health")
            .send()
            .await?
            .error_for_status()?
            .json::<BotHealth>()
            .await?;

        Ok(health)
    }

    pub async fn shards(&self) -> Result<Vec<BotShard>, AppError> {
        let shards = self
            .request("/shards")
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<BotShard>>()
            .await?;

        Ok(shards)
    }

    pub async fn find_guild(&self, guild_id: &str) -> Result<Vec<BotGuild>, AppError> {
        let guilds = self
            .request("/guilds/search")
            .query(&[("q", guild_id)])
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<BotGuild>>()
            .await?;

        Ok(guilds)
    }

    /// Raw GET pass-through for the `/bot-api/{path}` rewrite.
    ///
    /// Returns the upstream status code and JSON body without interpretation.
    pub async fn proxy_get(
        &self,
        path: &str,
        query: Option<&str>,
    ) -> Result<(u16, serde_json::Value), AppError> {
        let mut url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        if let Some(query) = query {
            url = format!("{}?{}", url, query);
        }

        let mut builder = self.http.get(url);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response
            .json::<serde_json::Value>()
            .await
            .unwrap_or(serde_json::Value::Null);

        Ok((status, body))
    }
}
