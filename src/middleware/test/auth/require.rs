use super::*;

/// Tests admin user successfully passes admin permission check.
///
/// Expected: Ok(User) with admin=true
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .discord_id("123456789")
        .name("AdminUser")
        .admin(true)
        .build()
        .await?;

    AuthSession::new(session).set_user_id(&user.discord_id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let returned_user = auth_guard.require(&[Permission::Admin]).await?;

    assert_eq!(returned_user.discord_id, "123456789");
    assert!(returned_user.admin);

    Ok(())
}

/// Tests non-admin user is denied admin permission.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_non_admin_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .discord_id("987654321")
        .admin(false)
        .build()
        .await?;

    AuthSession::new(session).set_user_id(&user.discord_id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Permission::Admin]).await;

    match result.unwrap_err() {
        AppError::AuthErr(AuthError::AccessDenied(user_id, message)) => {
            assert_eq!(user_id, "987654321");
            assert!(message.contains("admin"));
        }
        e => panic!("Expected AccessDenied error, got: {:?}", e),
    }

    Ok(())
}

/// Tests unauthenticated user is denied.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn denies_access_when_not_authenticated() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Permission::Admin]).await;

    match result.unwrap_err() {
        AppError::AuthErr(AuthError::UserNotInSession) => {}
        e => panic!("Expected UserNotInSession error, got: {:?}", e),
    }

    Ok(())
}

/// Tests a session pointing at a deleted user is rejected.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn denies_access_for_stale_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id("555").await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Permission::Admin]).await;

    match result.unwrap_err() {
        AppError::AuthErr(AuthError::UserNotInDatabase(user_id)) => {
            assert_eq!(user_id, "555");
        }
        e => panic!("Expected UserNotInDatabase error, got: {:?}", e),
    }

    Ok(())
}

/// Tests empty permission list grants access to any authenticated user.
///
/// Session-only routes (dashboard, Discord guild listing) use this form, so a
/// logged-in non-admin must pass rather than getting a 403.
///
/// Expected: Ok(User) with admin=false
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;

    AuthSession::new(session).set_user_id(&user.discord_id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let returned_user = auth_guard.require(&[]).await?;

    assert_eq!(returned_user.discord_id, user.discord_id);
    assert!(!returned_user.admin);

    Ok(())
}
