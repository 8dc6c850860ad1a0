//! Factory for partners.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct PartnerFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    tier: String,
    active: bool,
}

impl<'a> PartnerFactory<'a> {
    /// Defaults: unique name, tier `"community"`, active.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Partner {}", id),
            tier: "community".to_string(),
            active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn tier(mut self, tier: impl Into<String>) -> Self {
        self.tier = tier.into();
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub async fn build(self) -> Result<entity::partner::Model, DbErr> {
        entity::partner::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            tier: ActiveValue::Set(self.tier),
            website_url: ActiveValue::Set(None),
            logo_url: ActiveValue::Set(None),
            description: ActiveValue::Set(None),
            active: ActiveValue::Set(self.active),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active partner with default values.
pub async fn create_partner(db: &DatabaseConnection) -> Result<entity::partner::Model, DbErr> {
    PartnerFactory::new(db).build().await
}
