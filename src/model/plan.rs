use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Pricing plan as rendered on the plans page.
///
/// The `features` column stores a JSON array of strings; rows with malformed
/// feature data degrade to an empty list instead of failing the whole listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PricingPlanDto {
    pub id: i32,
    pub name: String,
    pub tier: String,
    pub price_cents: i32,
    pub period: String,
    pub features: Vec<String>,
    pub highlighted: bool,
    pub cta_label: String,
    pub cta_url: String,
}

impl PricingPlanDto {
    pub fn from_entity(entity: entity::pricing_plan::Model) -> Self {
        let features = serde_json::from_str(&entity.features).unwrap_or_else(|e| {
            tracing::warn!("Malformed features for plan {}: {}", entity.id, e);
            Vec::new()
        });

        Self {
            id: entity.id,
            name: entity.name,
            tier: entity.tier,
            price_cents: entity.price_cents,
            period: entity.period,
            features,
            highlighted: entity.highlighted,
            cta_label: entity.cta_label,
            cta_url: entity.cta_url,
        }
    }
}
