//! HTTP controllers: request parsing, access control, response shaping.
//!
//! Controllers are thin. They extract and validate request input, apply the
//! auth guard where a route is protected, call a service, and wrap the result
//! in the response envelope. Business logic lives in the service layer.

pub mod auth;
pub mod blog;
pub mod dashboard;
pub mod discord;
pub mod faq;
pub mod navigation;
pub mod partner;
pub mod plan;
pub mod redirect;
pub mod setting;
pub mod stats;
pub mod team;
pub mod testimonial;
