//! User DTOs and parameter types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Authenticated user as exposed by `/api/auth/user` and the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub discord_id: String,
    pub name: String,
    pub avatar: Option<String>,
    pub admin: bool,
}

impl UserDto {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            discord_id: entity.discord_id,
            name: entity.name,
            avatar: entity.avatar,
            admin: entity.admin,
        }
    }
}

/// Parameters for upserting a user during the OAuth callback.
///
/// The optional `is_admin` field preserves existing admin status when `None`,
/// so routine logins never strip or grant privileges.
#[derive(Debug, Clone)]
pub struct UpsertUserParams {
    pub discord_id: String,
    pub name: String,
    pub avatar: Option<String>,
    pub is_admin: Option<bool>,
}
