//! Factory for navigation items.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct NavigationItemFactory<'a> {
    db: &'a DatabaseConnection,
    label: String,
    href: String,
    parent_id: Option<i32>,
    sort_order: i32,
    external: bool,
}

impl<'a> NavigationItemFactory<'a> {
    /// Defaults: unique label and href, top-level, internal link.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            label: format!("Item {}", id),
            href: format!("/item-{}", id),
            parent_id: None,
            sort_order: 0,
            external: false,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = href.into();
        self
    }

    pub fn parent_id(mut self, parent_id: i32) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn external(mut self, external: bool) -> Self {
        self.external = external;
        self
    }

    pub async fn build(self) -> Result<entity::navigation_item::Model, DbErr> {
        entity::navigation_item::ActiveModel {
            id: ActiveValue::NotSet,
            label: ActiveValue::Set(self.label),
            href: ActiveValue::Set(self.href),
            parent_id: ActiveValue::Set(self.parent_id),
            sort_order: ActiveValue::Set(self.sort_order),
            external: ActiveValue::Set(self.external),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a top-level navigation item with default values.
pub async fn create_navigation_item(
    db: &DatabaseConnection,
) -> Result<entity::navigation_item::Model, DbErr> {
    NavigationItemFactory::new(db).build().await
}
