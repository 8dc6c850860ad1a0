use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TestimonialDto {
    pub id: i32,
    pub author_name: String,
    pub author_title: Option<String>,
    pub avatar_url: Option<String>,
    pub content: String,
    pub rating: i32,
    pub featured: bool,
}

impl TestimonialDto {
    pub fn from_entity(entity: entity::testimonial::Model) -> Self {
        Self {
            id: entity.id,
            author_name: entity.author_name,
            author_title: entity.author_title,
            avatar_url: entity.avatar_url,
            content: entity.content,
            rating: entity.rating,
            featured: entity.featured,
        }
    }
}
