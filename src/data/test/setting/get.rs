use super::*;
use entity::prelude::SiteSetting;

/// Tests looking up an existing setting by key.
#[tokio::test]
async fn gets_existing_setting() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(SiteSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::setting::create_setting(db, "site_name", "Nyxara").await?;

    let repo = SiteSettingRepository::new(db);
    let setting = repo.get("site_name").await?;

    assert_eq!(setting.unwrap().value, "Nyxara");

    Ok(())
}

/// Tests the miss path for an unknown key.
#[tokio::test]
async fn returns_none_for_unknown_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(SiteSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SiteSettingRepository::new(db);
    let setting = repo.get("missing").await?;

    assert!(setting.is_none());

    Ok(())
}

/// Tests that get_all returns settings ordered by key.
#[tokio::test]
async fn gets_all_ordered_by_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(SiteSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::setting::create_setting(db, "banner_text", "Welcome").await?;
    factory::setting::create_setting(db, "accent_color", "#7c3aed").await?;

    let repo = SiteSettingRepository::new(db);
    let settings = repo.get_all().await?;

    assert_eq!(settings.len(), 2);
    assert_eq!(settings[0].key, "accent_color");
    assert_eq!(settings[1].key, "banner_text");

    Ok(())
}
