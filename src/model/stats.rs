use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public bot statistics served by `/api/stats`.
///
/// Built either from live bot API telemetry or from simulated fallback numbers;
/// the envelope's `meta.source` tells the two apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StatsDto {
    pub guilds: u64,
    pub users: u64,
    pub commands_run: u64,
    pub uptime_secs: u64,
    pub shards: Vec<ShardDto>,
}

/// One shard of the bot's gateway connection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ShardDto {
    pub id: u32,
    pub status: String,
    pub latency_ms: u64,
    pub guilds: u64,
}
