//! Simulated bot telemetry for when the bot API is unreachable.
//!
//! The marketing site must keep rendering statistics even while the bot process
//! is down or restarting, so `/api/stats` substitutes numbers in the range the
//! real deployment reports. Consumers can only tell the difference by the
//! envelope's `source` field.

use rand::Rng;

use crate::model::stats::{ShardDto, StatsDto};

const SHARD_COUNT: u32 = 4;

/// Generates a plausible, fully populated statistics payload.
pub fn simulated_stats() -> StatsDto {
    let mut rng = rand::rng();

    let mut shards = Vec::with_capacity(SHARD_COUNT as usize);
    let mut guilds = 0u64;
    for id in 0..SHARD_COUNT {
        let shard_guilds = rng.random_range(280..340);
        guilds += shard_guilds;
        shards.push(ShardDto {
            id,
            status: "healthy".to_string(),
            latency_ms: rng.random_range(35..95),
            guilds: shard_guilds,
        });
    }

    StatsDto {
        guilds,
        users: rng.random_range(180_000..220_000),
        commands_run: rng.random_range(2_400_000..2_600_000),
        uptime_secs: rng.random_range(600..86_400),
        shards,
    }
}
