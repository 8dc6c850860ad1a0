use super::*;
use entity::prelude::Partner;

/// Tests that inactive partners are excluded.
#[tokio::test]
async fn excludes_inactive_partners() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Partner)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let active = factory::create_partner(db).await?;
    factory::partner::PartnerFactory::new(db)
        .name("Former Partner")
        .active(false)
        .build()
        .await?;

    let repo = PartnerRepository::new(db);
    let partners = repo.get_active(None).await?;

    assert_eq!(partners.len(), 1);
    assert_eq!(partners[0].id, active.id);

    Ok(())
}

/// Tests the tier filter returns only partners of that tier.
#[tokio::test]
async fn filters_by_tier() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Partner)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let gold = factory::partner::PartnerFactory::new(db)
        .tier("gold")
        .build()
        .await?;
    factory::partner::PartnerFactory::new(db)
        .tier("platinum")
        .build()
        .await?;

    let repo = PartnerRepository::new(db);
    let partners = repo.get_active(Some("gold")).await?;

    assert_eq!(partners.len(), 1);
    assert_eq!(partners[0].id, gold.id);

    Ok(())
}

/// Tests partners come back ordered by tier, then name within a tier.
#[tokio::test]
async fn orders_by_tier_then_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Partner)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::partner::PartnerFactory::new(db)
        .tier("platinum")
        .name("Aurora Labs")
        .build()
        .await?;
    factory::partner::PartnerFactory::new(db)
        .tier("gold")
        .name("Zephyr Hosting")
        .build()
        .await?;
    factory::partner::PartnerFactory::new(db)
        .tier("gold")
        .name("Meteor Games")
        .build()
        .await?;

    let repo = PartnerRepository::new(db);
    let partners = repo.get_active(None).await?;

    let order: Vec<(&str, &str)> = partners
        .iter()
        .map(|partner| (partner.tier.as_str(), partner.name.as_str()))
        .collect();
    assert_eq!(
        order,
        vec![
            ("gold", "Meteor Games"),
            ("gold", "Zephyr Hosting"),
            ("platinum", "Aurora Labs"),
        ]
    );

    Ok(())
}
