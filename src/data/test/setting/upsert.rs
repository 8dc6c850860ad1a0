use super::*;
use entity::prelude::SiteSetting;

/// Tests inserting a new setting through upsert.
#[tokio::test]
async fn inserts_new_setting() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(SiteSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SiteSettingRepository::new(db);
    let setting = repo
        .upsert("maintenance_mode".to_string(), "off".to_string())
        .await?;

    assert_eq!(setting.key, "maintenance_mode");
    assert_eq!(setting.value, "off");

    Ok(())
}

/// Tests that upserting an existing key overwrites its value in place.
#[tokio::test]
async fn updates_existing_setting() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(SiteSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::setting::create_setting(db, "maintenance_mode", "off").await?;

    let repo = SiteSettingRepository::new(db);
    let setting = repo
        .upsert("maintenance_mode".to_string(), "on".to_string())
        .await?;

    assert_eq!(setting.value, "on");

    // Still a single row
    let all = repo.get_all().await?;
    assert_eq!(all.len(), 1);

    Ok(())
}
