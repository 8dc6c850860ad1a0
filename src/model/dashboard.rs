use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserDto;

/// Aggregate payload for the authenticated dashboard view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DashboardDto {
    pub user: UserDto,
    pub bot_status: String,
    pub guilds: u64,
    pub users: u64,
    pub shard_count: u64,
    pub uptime_secs: u64,
}
