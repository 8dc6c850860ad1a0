//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for
//! customization and a `create_*` convenience function for quick default
//! creation. Factories generate unique identifiers from a shared counter so
//! tests never collide on unique columns.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let post = factory::blog::create_post(&db, None).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! let post = factory::blog::BlogPostFactory::new(&db)
//!     .title("Release notes")
//!     .published(false)
//!     .build()
//!     .await?;
//! ```

pub mod blog;
pub mod faq;
pub mod helpers;
pub mod navigation;
pub mod partner;
pub mod plan;
pub mod setting;
pub mod team;
pub mod testimonial;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use blog::{create_category, create_post};
pub use faq::create_faq_entry;
pub use navigation::create_navigation_item;
pub use partner::create_partner;
pub use plan::create_plan;
pub use setting::create_setting;
pub use team::{create_department, create_team_member};
pub use testimonial::create_testimonial;
pub use user::{create_admin, create_user};
