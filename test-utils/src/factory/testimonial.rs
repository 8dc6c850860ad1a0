//! Factory for testimonials.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct TestimonialFactory<'a> {
    db: &'a DatabaseConnection,
    author_name: String,
    content: String,
    rating: i32,
    featured: bool,
}

impl<'a> TestimonialFactory<'a> {
    /// Defaults: unique author and content, rating 5, not featured.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            author_name: format!("Author {}", id),
            content: format!("Testimonial {}", id),
            rating: 5,
            featured: false,
        }
    }

    pub fn author_name(mut self, author_name: impl Into<String>) -> Self {
        self.author_name = author_name.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn rating(mut self, rating: i32) -> Self {
        self.rating = rating;
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    pub async fn build(self) -> Result<entity::testimonial::Model, DbErr> {
        entity::testimonial::ActiveModel {
            id: ActiveValue::NotSet,
            author_name: ActiveValue::Set(self.author_name),
            author_title: ActiveValue::Set(None),
            avatar_url: ActiveValue::Set(None),
            content: ActiveValue::Set(self.content),
            rating: ActiveValue::Set(self.rating),
            featured: ActiveValue::Set(self.featured),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a testimonial with default values.
pub async fn create_testimonial(
    db: &DatabaseConnection,
) -> Result<entity::testimonial::Model, DbErr> {
    TestimonialFactory::new(db).build().await
}
