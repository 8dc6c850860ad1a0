use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
};

pub enum Permission {
    Admin,
}

/// Session-backed access guard for protected endpoints.
///
/// Resolves the session's Discord ID to a database user and checks the
/// requested permissions against it.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Requires an authenticated user holding all listed permissions.
    ///
    /// # Returns
    /// - `Ok(Model)` - The authenticated user
    /// - `Err(AuthError::UserNotInSession)` - No user in session (401)
    /// - `Err(AuthError::UserNotInDatabase)` - Session user no longer exists (401)
    /// - `Err(AuthError::AccessDenied)` - User lacks a required permission (403)
    pub async fn require(
        &self,
        permissions: &[Permission],
    ) -> Result<entity::user::Model, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_discord_id(&user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.admin {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "Endpoint requires admin permissions".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
