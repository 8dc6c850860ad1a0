//! Calls to Discord's REST API made on behalf of a logged-in user.

use crate::{error::AppError, model::discord::DiscordGuildDto};

const DISCORD_GUILDS_URL: &str = "https://discord.com/api/users/@me/guilds";

pub struct DiscordService<'a> {
    http_client: &'a reqwest::Client,
}

impl<'a> DiscordService<'a> {
    pub fn new(http_client: &'a reqwest::Client) -> Self {
        Self { http_client }
    }

    /// Lists the guilds the user belongs to, using the OAuth access token
    /// stored in their session at login.
    pub async fn user_guilds(&self, access_token: &str) -> Result<Vec<DiscordGuildDto>, AppError> {
        let guilds = self
            .http_client
            .get(DISCORD_GUILDS_URL)
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<DiscordGuildDto>>()
            .await?;

        Ok(guilds)
    }
}
