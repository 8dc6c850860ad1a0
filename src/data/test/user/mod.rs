use crate::{data::user::UserRepository, model::user::UpsertUserParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod admin_exists;
mod find_by_discord_id;
mod upsert;
