use crate::{model::api::DataSource, service::plan::PlanService};
use entity::prelude::PricingPlan;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, context::TestContext, factory};

/// Tests that database plans are returned with parsed feature lists.
#[tokio::test]
async fn serves_database_plans() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(PricingPlan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::plan::PricingPlanFactory::new(db)
        .name("Premium")
        .features(vec!["Auto-mod".to_string(), "Custom commands".to_string()])
        .build()
        .await?;

    let service = PlanService::new(db);
    let (plans, source) = service.list().await;

    assert_eq!(source, DataSource::Database);
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].name, "Premium");
    assert_eq!(plans[0].features.len(), 2);

    Ok(())
}

/// Tests that a malformed features column degrades to an empty list rather
/// than failing the whole listing.
#[tokio::test]
async fn tolerates_malformed_features() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(PricingPlan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::plan::PricingPlanFactory::new(db)
        .raw_features("not json")
        .build()
        .await?;

    let service = PlanService::new(db);
    let (plans, source) = service.list().await;

    assert_eq!(source, DataSource::Database);
    assert_eq!(plans.len(), 1);
    assert!(plans[0].features.is_empty());

    Ok(())
}

/// Tests the fallback path when the plans table is missing entirely.
///
/// Expected: the static plan set, tagged as fallback.
#[tokio::test]
async fn substitutes_fallback_when_database_fails() {
    let mut test = TestContext::new();
    let db = test.database().await.unwrap();

    let service = PlanService::new(db);
    let (plans, source) = service.list().await;

    assert_eq!(source, DataSource::Fallback);
    assert!(!plans.is_empty());
    assert!(plans.iter().any(|plan| plan.tier == "free"));
}
