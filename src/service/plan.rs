//! Pricing plans with static fallback.

use sea_orm::DatabaseConnection;

use crate::{
    data::plan::PricingPlanRepository,
    model::{api::DataSource, plan::PricingPlanDto},
};

pub struct PlanService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the plan list and where it came from.
    ///
    /// A database failure is logged and masked with the static fallback plans,
    /// in the same DTO shape, so the pricing page keeps rendering during an
    /// outage. This method never returns an error.
    pub async fn list(&self) -> (Vec<PricingPlanDto>, DataSource) {
        let repo = PricingPlanRepository::new(self.db);

        match repo.get_all().await {
            Ok(plans) => (
                plans.into_iter().map(PricingPlanDto::from_entity).collect(),
                DataSource::Database,
            ),
            Err(err) => {
                tracing::warn!("Failed to load plans, serving fallback: {}", err);
                (fallback_plans(), DataSource::Fallback)
            }
        }
    }
}

/// Static plan set used when the database is unreachable.
pub fn fallback_plans() -> Vec<PricingPlanDto> {
    vec![
        PricingPlanDto {
            id: 1,
            name: "Free".to_string(),
            tier: "free".to_string(),
            price_cents: 0,
            period: "month".to_string(),
            features: vec![
                "Moderation commands".to_string(),
                "Welcome messages".to_string(),
                "Up to 3 custom commands".to_string(),
            ],
            highlighted: false,
            cta_label: "Add to Discord".to_string(),
            cta_url: "/invite".to_string(),
        },
        PricingPlanDto {
            id: 2,
            name: "Premium".to_string(),
            tier: "premium".to_string(),
            price_cents: 499,
            period: "month".to_string(),
            features: vec![
                "Everything in Free".to_string(),
                "Advanced auto-moderation".to_string(),
                "Unlimited custom commands".to_string(),
                "Priority support".to_string(),
            ],
            highlighted: true,
            cta_label: "Go Premium".to_string(),
            cta_url: "/premium".to_string(),
        },
        PricingPlanDto {
            id: 3,
            name: "Ultimate".to_string(),
            tier: "ultimate".to_string(),
            price_cents: 999,
            period: "month".to_string(),
            features: vec![
                "Everything in Premium".to_string(),
                "Custom bot branding".to_string(),
                "Dedicated shard".to_string(),
            ],
            highlighted: false,
            cta_label: "Contact us".to_string(),
            cta_url: "/support".to_string(),
        },
    ]
}
