use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FaqEntryDto {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: Option<String>,
}

impl FaqEntryDto {
    pub fn from_entity(entity: entity::faq_entry::Model) -> Self {
        Self {
            id: entity.id,
            question: entity.question,
            answer: entity.answer,
            category: entity.category,
        }
    }
}
