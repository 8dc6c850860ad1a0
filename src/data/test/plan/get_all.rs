use super::*;
use entity::prelude::PricingPlan;

/// Tests that plans come back in sort order.
#[tokio::test]
async fn orders_by_sort_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(PricingPlan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let premium = factory::plan::PricingPlanFactory::new(db)
        .tier("premium")
        .sort_order(2)
        .build()
        .await?;
    let free = factory::plan::PricingPlanFactory::new(db)
        .tier("free")
        .sort_order(1)
        .build()
        .await?;

    let repo = PricingPlanRepository::new(db);
    let plans = repo.get_all().await?;

    assert_eq!(plans.len(), 2);
    assert_eq!(plans[0].id, free.id);
    assert_eq!(plans[1].id, premium.id);

    Ok(())
}
