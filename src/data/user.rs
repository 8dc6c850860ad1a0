//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles user creation on first login, profile refresh on subsequent logins, and
//! lookups by Discord ID.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::model::user::UpsertUserParams;

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts a user during the OAuth callback.
    ///
    /// Inserts a new user or refreshes an existing user's name, avatar, and last
    /// login timestamp. The admin flag is only touched when `is_admin` is `Some`,
    /// so routine logins can never alter privileges.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created or updated user
    /// - `Err(DbErr)` - Database error during insert or lookup
    pub async fn upsert(&self, params: UpsertUserParams) -> Result<entity::user::Model, DbErr> {
        let mut update_columns = vec![
            entity::user::Column::Name,
            entity::user::Column::Avatar,
            entity::user::Column::LastLoginAt,
        ];

        if params.is_admin.is_some() {
            update_columns.push(entity::user::Column::Admin);
        }

        let now = Utc::now();

        entity::prelude::User::insert(entity::user::ActiveModel {
            discord_id: ActiveValue::Set(params.discord_id.clone()),
            name: ActiveValue::Set(params.name),
            avatar: ActiveValue::Set(params.avatar),
            admin: ActiveValue::Set(params.is_admin.unwrap_or(false)),
            created_at: ActiveValue::Set(now),
            last_login_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::DiscordId)
                .update_columns(update_columns)
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        self.find_by_discord_id(&params.discord_id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "User {} not found after upsert",
                params.discord_id
            )))
    }

    /// Finds a user by their Discord ID.
    pub async fn find_by_discord_id(
        &self,
        discord_id: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(discord_id).one(self.db).await
    }

    /// Checks whether any admin users exist.
    ///
    /// Used at startup to log a setup hint when the instance has no admin yet.
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        use sea_orm::PaginatorTrait;

        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Admin.eq(true))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }
}
