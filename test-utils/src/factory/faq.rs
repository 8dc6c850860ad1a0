//! Factory for FAQ entries.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct FaqEntryFactory<'a> {
    db: &'a DatabaseConnection,
    question: String,
    answer: String,
    category: Option<String>,
    sort_order: i32,
    published: bool,
}

impl<'a> FaqEntryFactory<'a> {
    /// Defaults: unique question/answer text, no category, published.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            question: format!("Question {}?", id),
            answer: format!("Answer {}", id),
            category: None,
            sort_order: 0,
            published: true,
        }
    }

    pub fn question(mut self, question: impl Into<String>) -> Self {
        self.question = question.into();
        self
    }

    pub fn answer(mut self, answer: impl Into<String>) -> Self {
        self.answer = answer.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }

    pub async fn build(self) -> Result<entity::faq_entry::Model, DbErr> {
        entity::faq_entry::ActiveModel {
            id: ActiveValue::NotSet,
            question: ActiveValue::Set(self.question),
            answer: ActiveValue::Set(self.answer),
            category: ActiveValue::Set(self.category),
            sort_order: ActiveValue::Set(self.sort_order),
            published: ActiveValue::Set(self.published),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a published FAQ entry with default values.
pub async fn create_faq_entry(db: &DatabaseConnection) -> Result<entity::faq_entry::Model, DbErr> {
    FaqEntryFactory::new(db).build().await
}
