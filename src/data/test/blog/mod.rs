use crate::data::blog::{BlogCategoryRepository, BlogPostFilter, BlogPostRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_published_by_slug;
mod get_all_with_counts;
mod list_published;
