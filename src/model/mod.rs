//! Data transfer objects for the JSON API.
//!
//! Every endpoint wraps its payload in the `{success, data?, meta?}` envelope from
//! `api`, with failures represented by `api::ErrorDto`. The remaining modules hold
//! per-domain DTOs plus their conversions from entity models.

pub mod api;
pub mod blog;
pub mod dashboard;
pub mod discord;
pub mod faq;
pub mod navigation;
pub mod partner;
pub mod plan;
pub mod setting;
pub mod stats;
pub mod team;
pub mod testimonial;
pub mod user;
