use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

pub struct SiteSettingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SiteSettingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::site_setting::Model>, DbErr> {
        entity::prelude::SiteSetting::find()
            .order_by_asc(entity::site_setting::Column::Key)
            .all(self.db)
            .await
    }

    pub async fn get(&self, key: &str) -> Result<Option<entity::site_setting::Model>, DbErr> {
        entity::prelude::SiteSetting::find_by_id(key).one(self.db).await
    }

    /// Inserts or updates a setting and returns the stored row.
    ///
    /// Split into insert-then-select because MySQL has no `RETURNING`.
    pub async fn upsert(
        &self,
        key: String,
        value: String,
    ) -> Result<entity::site_setting::Model, DbErr> {
        entity::prelude::SiteSetting::insert(entity::site_setting::ActiveModel {
            key: ActiveValue::Set(key.clone()),
            value: ActiveValue::Set(value),
            updated_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(entity::site_setting::Column::Key)
                .update_columns([
                    entity::site_setting::Column::Value,
                    entity::site_setting::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        self.get(&key).await?.ok_or(DbErr::RecordNotFound(format!(
            "Setting '{}' not found after upsert",
            key
        )))
    }
}
