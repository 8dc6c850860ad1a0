//! Factory for pricing plans.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct PricingPlanFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    tier: String,
    price_cents: i32,
    features: Vec<String>,
    highlighted: bool,
    sort_order: i32,
}

impl<'a> PricingPlanFactory<'a> {
    /// Defaults: unique name, tier `"free"`, price 0, one feature, monthly.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Plan {}", id),
            tier: "free".to_string(),
            price_cents: 0,
            features: vec![format!("Feature {}", id)],
            highlighted: false,
            sort_order: 0,
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

    pub fn price_cents(mut self, price_cents: i32) -> Self {
        self.price_cents = price_cents;
        self
    }

    pub fn features(mut self, features: Vec<String>) -> Self {
        self.features = features;
        self
    }

    /// Sets the raw `features` column text directly, bypassing JSON encoding.
    /// Used to test tolerance of malformed rows.
    pub fn raw_features(self, raw: impl Into<String>) -> RawFeaturesPlanFactory<'a> {
        RawFeaturesPlanFactory {
            inner: self,
            raw: raw.into(),
        }
    }

    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }

    pub fn sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub async fn build(self) -> Result<entity::pricing_plan::Model, DbErr> {
        let features = serde_json::to_string(&self.features)
            .map_err(|e| DbErr::Custom(format!("Failed to encode plan features: {}", e)))?;

        insert_plan(self, features).await
    }
}

/// Variant of `PricingPlanFactory` that writes the features column verbatim.
pub struct RawFeaturesPlanFactory<'a> {
    inner: PricingPlanFactory<'a>,
    raw: String,
}

impl<'a> RawFeaturesPlanFactory<'a> {
    pub async fn build(self) -> Result<entity::pricing_plan::Model, DbErr> {
        insert_plan(self.inner, self.raw).await
    }
}

async fn insert_plan(
    factory: PricingPlanFactory<'_>,
    features: String,
) -> Result<entity::pricing_plan::Model, DbErr> {
    entity::pricing_plan::ActiveModel {
        id: ActiveValue::NotSet,
        name: ActiveValue::Set(factory.name),
        tier: ActiveValue::Set(factory.tier),
        price_cents: ActiveValue::Set(factory.price_cents),
        period: ActiveValue::Set("month".to_string()),
        features: ActiveValue::Set(features),
        highlighted: ActiveValue::Set(factory.highlighted),
        cta_label: ActiveValue::Set("Get started".to_string()),
        cta_url: ActiveValue::Set("/invite".to_string()),
        sort_order: ActiveValue::Set(factory.sort_order),
    }
    .insert(factory.db)
    .await
}

/// Creates a pricing plan with default values.
pub async fn create_plan(db: &DatabaseConnection) -> Result<entity::pricing_plan::Model, DbErr> {
    PricingPlanFactory::new(db).build().await
}
