use super::*;
use entity::prelude::User;

/// Tests finding an existing user by Discord ID.
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_discord_id(&created.discord_id).await?;

    assert_eq!(found.unwrap().discord_id, created.discord_id);

    Ok(())
}

/// Tests the miss path for an unknown Discord ID.
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let found = repo.find_by_discord_id("999999").await?;

    assert!(found.is_none());

    Ok(())
}
