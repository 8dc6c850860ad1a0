use super::*;
use entity::prelude::User;

fn params(discord_id: &str) -> UpsertUserParams {
    UpsertUserParams {
        discord_id: discord_id.to_string(),
        name: "Nyx".to_string(),
        avatar: None,
        is_admin: None,
    }
}

/// Tests creating a user on first login.
#[tokio::test]
async fn creates_user_on_first_login() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.upsert(params("100")).await?;

    assert_eq!(user.discord_id, "100");
    assert_eq!(user.name, "Nyx");
    assert!(!user.admin);

    Ok(())
}

/// Tests that a routine login refreshes profile fields.
#[tokio::test]
async fn refreshes_profile_on_login() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("100")
        .name("Old Name")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParams {
            avatar: Some("abc123".to_string()),
            ..params("100")
        })
        .await?;

    assert_eq!(user.name, "Nyx");
    assert_eq!(user.avatar.as_deref(), Some("abc123"));

    Ok(())
}

/// Tests that a login with `is_admin: None` cannot strip admin privileges.
#[tokio::test]
async fn preserves_admin_flag_on_login() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("100")
        .admin(true)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.upsert(params("100")).await?;

    assert!(user.admin);

    Ok(())
}

/// Tests explicit admin promotion through the upsert.
#[tokio::test]
async fn promotes_admin_when_requested() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParams {
            is_admin: Some(true),
            ..params("100")
        })
        .await?;

    assert!(user.admin);

    Ok(())
}
