//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and
//! hand them back to the service layer, which converts them to DTOs. All database
//! queries, inserts, and updates are performed through these repositories.

pub mod blog;
pub mod faq;
pub mod navigation;
pub mod partner;
pub mod plan;
pub mod setting;
pub mod team;
pub mod testimonial;
pub mod user;

#[cfg(test)]
mod test;
