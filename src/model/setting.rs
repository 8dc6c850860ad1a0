use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SettingDto {
    pub key: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

impl SettingDto {
    pub fn from_entity(entity: entity::site_setting::Model) -> Self {
        Self {
            key: entity.key,
            value: entity.value,
            updated_at: entity.updated_at,
        }
    }
}

/// Body of `POST /api/settings`. `key` is optional only so its absence can be
/// reported as the documented 400 rather than a deserialization error.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateSettingDto {
    pub key: Option<String>,
    pub value: Option<String>,
}
