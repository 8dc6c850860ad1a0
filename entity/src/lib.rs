//! SeaORM entity models for the Nyxara web database.

pub mod blog_category;
pub mod blog_post;
pub mod department;
pub mod faq_entry;
pub mod navigation_item;
pub mod partner;
pub mod pricing_plan;
pub mod site_setting;
pub mod team_member;
pub mod testimonial;
pub mod user;

pub mod prelude;
