use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Navigation entry with one level of children, as consumed by the site header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NavigationItemDto {
    pub id: i32,
    pub label: String,
    pub href: String,
    pub external: bool,
    pub children: Vec<NavigationItemDto>,
}

impl NavigationItemDto {
    pub fn from_entity(
        entity: entity::navigation_item::Model,
        children: Vec<NavigationItemDto>,
    ) -> Self {
        Self {
            id: entity.id,
            label: entity.label,
            href: entity.href,
            external: entity.external,
            children,
        }
    }
}
