//! Factory for site settings.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a site setting with the given key and value.
pub async fn create_setting(
    db: &DatabaseConnection,
    key: impl Into<String>,
    value: impl Into<String>,
) -> Result<entity::site_setting::Model, DbErr> {
    entity::site_setting::ActiveModel {
        key: ActiveValue::Set(key.into()),
        value: ActiveValue::Set(value.into()),
        updated_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
