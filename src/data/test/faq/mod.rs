use crate::data::faq::FaqRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_published;
