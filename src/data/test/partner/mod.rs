use crate::data::partner::PartnerRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_active;
