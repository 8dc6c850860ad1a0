use crate::data::setting::SiteSettingRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get;
mod upsert;
