//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository)
//! layer. They convert entity models to DTOs, decide when to substitute fallback
//! payloads for failed backends, and orchestrate calls to Discord and the remote
//! bot control API.

pub mod auth;
pub mod blog;
pub mod bot_api;
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

#[cfg(test)]
mod test;
