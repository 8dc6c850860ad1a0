use std::collections::BTreeMap;

use sea_orm::DatabaseConnection;

use crate::{
    data::setting::SiteSettingRepository,
    error::AppError,
    model::setting::SettingDto,
};

/// Parameters for the settings upsert, taken from the request body as-is so a
/// missing key can be reported with the documented 400.
#[derive(Debug, Clone)]
pub struct UpdateSettingParams {
    pub key: Option<String>,
    pub value: Option<String>,
}

pub struct SettingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns all settings as a key/value map.
    pub async fn all(&self) -> Result<BTreeMap<String, String>, AppError> {
        let repo = SiteSettingRepository::new(self.db);

        let settings = repo.get_all().await?;

        Ok(settings
            .into_iter()
            .map(|setting| (setting.key, setting.value))
            .collect())
    }

    pub async fn get(&self, key: &str) -> Result<Option<SettingDto>, AppError> {
        let repo = SiteSettingRepository::new(self.db);

        let setting = repo.get(key).await?;

        Ok(setting.map(SettingDto::from_entity))
    }

    /// Upserts a setting.
    ///
    /// # Returns
    /// - `Ok(SettingDto)` - The stored setting
    /// - `Err(AppError::BadRequest)` - `key` was absent or empty
    pub async fn update(&self, params: UpdateSettingParams) -> Result<SettingDto, AppError> {
        let key = match params.key {
            Some(key) if !key.is_empty() => key,
            _ => return Err(AppError::BadRequest("Missing key parameter".to_string())),
        };

        let repo = SiteSettingRepository::new(self.db);

        let setting = repo.upsert(key, params.value.unwrap_or_default()).await?;

        Ok(SettingDto::from_entity(setting))
    }
}
