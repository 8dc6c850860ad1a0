use crate::{
    error::AppError,
    service::setting::{SettingService, UpdateSettingParams},
};
use entity::prelude::SiteSetting;
use test_utils::{builder::TestBuilder, factory};

/// Tests that an absent key is rejected with the documented message.
#[tokio::test]
async fn rejects_missing_key() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(SiteSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = SettingService::new(db);
    let result = service
        .update(UpdateSettingParams {
            key: None,
            value: Some("ignored".to_string()),
        })
        .await;

    match result.unwrap_err() {
        AppError::BadRequest(message) => assert_eq!(message, "Missing key parameter"),
        e => panic!("Expected BadRequest error, got: {:?}", e),
    }

    Ok(())
}

/// Tests that an empty key is treated the same as an absent one.
#[tokio::test]
async fn rejects_empty_key() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(SiteSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = SettingService::new(db);
    let result = service
        .update(UpdateSettingParams {
            key: Some(String::new()),
            value: None,
        })
        .await;

    assert!(matches!(result.unwrap_err(), AppError::BadRequest(_)));

    Ok(())
}

/// Tests that a missing value defaults to an empty string.
#[tokio::test]
async fn defaults_value_to_empty_string() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(SiteSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = SettingService::new(db);
    let setting = service
        .update(UpdateSettingParams {
            key: Some("maintenance_banner".to_string()),
            value: None,
        })
        .await?;

    assert_eq!(setting.key, "maintenance_banner");
    assert_eq!(setting.value, "");

    Ok(())
}

/// Tests that all() returns every stored setting keyed by name.
#[tokio::test]
async fn maps_all_settings_by_key() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(SiteSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::setting::create_setting(db, "site_name", "Nyxara").await?;
    factory::setting::create_setting(db, "support_email", "help@nyxara.app").await?;

    let service = SettingService::new(db);
    let settings = service.all().await?;

    assert_eq!(settings.len(), 2);
    assert_eq!(settings.get("site_name").map(String::as_str), Some("Nyxara"));
    assert_eq!(
        settings.get("support_email").map(String::as_str),
        Some("help@nyxara.app")
    );

    Ok(())
}
