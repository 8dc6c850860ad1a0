use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PartnerDto {
    pub id: i32,
    pub name: String,
    pub tier: String,
    pub website_url: Option<String>,
    pub logo_url: Option<String>,
    pub description: Option<String>,
}

impl PartnerDto {
    pub fn from_entity(entity: entity::partner::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            tier: entity.tier,
            website_url: entity.website_url,
            logo_url: entity.logo_url,
            description: entity.description,
        }
    }
}
