use crate::{
    error::AppError,
    middleware::session::{AuthSession, CsrfSession},
};
use test_utils::context::TestContext;

/// Tests the auth session round-trips the user ID and access token.
#[tokio::test]
async fn stores_user_id_and_access_token() -> Result<(), AppError> {
    let mut test = TestContext::new();
    let session = test.session().await.unwrap();

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id("123456789").await?;
    auth_session.set_access_token("token-abc").await?;

    assert_eq!(auth_session.get_user_id().await?.as_deref(), Some("123456789"));
    assert_eq!(
        auth_session.get_access_token().await?.as_deref(),
        Some("token-abc")
    );

    Ok(())
}

/// Tests clear() wipes everything including the access token.
#[tokio::test]
async fn clear_removes_all_state() -> Result<(), AppError> {
    let mut test = TestContext::new();
    let session = test.session().await.unwrap();

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id("123456789").await?;
    auth_session.set_access_token("token-abc").await?;

    auth_session.clear().await;

    assert!(auth_session.get_user_id().await?.is_none());
    assert!(auth_session.get_access_token().await?.is_none());

    Ok(())
}

/// Tests the CSRF token can only be taken once.
#[tokio::test]
async fn csrf_token_is_single_use() -> Result<(), AppError> {
    let mut test = TestContext::new();
    let session = test.session().await.unwrap();

    let csrf_session = CsrfSession::new(session);
    csrf_session.set_token("state-xyz".to_string()).await?;

    assert_eq!(csrf_session.take_token().await?.as_deref(), Some("state-xyz"));
    assert!(csrf_session.take_token().await?.is_none());

    Ok(())
}
