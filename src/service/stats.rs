//! Public bot statistics with simulated fallback.

use crate::{
    model::{
        api::DataSource,
        stats::{ShardDto, StatsDto},
    },
    service::bot_api::{fallback, BotApiClient},
};

pub struct StatsService<'a> {
    bot_api: &'a BotApiClient,
}

impl<'a> StatsService<'a> {
    pub fn new(bot_api: &'a BotApiClient) -> Self {
        Self { bot_api }
    }

    /// Returns the statistics payload and where it came from.
    ///
    /// Any bot API failure is logged and replaced with simulated data; this
    /// method never returns an error, so `/api/stats` can never surface a 500.
    pub async fn overview(&self) -> (StatsDto, DataSource) {
        match self.live_stats().await {
            Ok(stats) => (stats, DataSource::Live),
            Err(err) => {
                tracing::warn!("Bot API unavailable, serving simulated stats: {}", err);
                (fallback::simulated_stats(), DataSource::Simulated)
            }
        }
    }

    async fn live_stats(&self) -> Result<StatsDto, crate::error::AppError> {
        let health = self.bot_api.health().await?;
        let shards = self.bot_api.shards().await?;

        Ok(StatsDto {
            guilds: health.guilds,
            users: health.users,
            commands_run: health.commands_run,
            uptime_secs: health.uptime_secs,
            shards: shards
                .into_iter()
                .map(|shard| ShardDto {
                    id: shard.id,
                    status: shard.status,
                    latency_ms: shard.latency_ms,
                    guilds: shard.guilds,
                })
                .collect(),
        })
    }
}
