use crate::{
    error::AppError,
    model::{dashboard::DashboardDto, user::UserDto},
    service::bot_api::BotApiClient,
};

pub struct DashboardService<'a> {
    bot_api: &'a BotApiClient,
}

impl<'a> DashboardService<'a> {
    pub fn new(bot_api: &'a BotApiClient) -> Self {
        Self { bot_api }
    }

    /// Builds the dashboard payload for an authenticated admin.
    ///
    /// Unlike the public stats endpoint, this does not substitute fallback
    /// data; an admin looking at the dashboard needs to know the bot API is
    /// down, so failures propagate as errors.
    pub async fn overview(&self, user: entity::user::Model) -> Result<DashboardDto, AppError> {
        let health = self.bot_api.health().await?;
        let shards = self.bot_api.shards().await?;

        Ok(DashboardDto {
            user: UserDto::from_entity(user),
            bot_status: health.status,
            guilds: health.guilds,
            users: health.users,
            shard_count: shards.len() as u64,
            uptime_secs: health.uptime_secs,
        })
    }
}
