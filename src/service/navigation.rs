//! Site navigation with static fallback.

use sea_orm::DatabaseConnection;

use crate::{
    data::navigation::NavigationItemRepository,
    model::{api::DataSource, navigation::NavigationItemDto},
};

pub struct NavigationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NavigationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the navigation tree and where it came from.
    ///
    /// A database failure is logged and masked with the static fallback items,
    /// in the same DTO shape, so the site header keeps rendering during an
    /// outage. This method never returns an error.
    pub async fn items(&self) -> (Vec<NavigationItemDto>, DataSource) {
        let repo = NavigationItemRepository::new(self.db);

        match repo.get_all().await {
            Ok(items) => (build_tree(items), DataSource::Database),
            Err(err) => {
                tracing::warn!("Failed to load navigation, serving fallback: {}", err);
                (fallback_items(), DataSource::Fallback)
            }
        }
    }
}

/// Assembles top-level items with one level of children, preserving the
/// repository's sort order.
fn build_tree(items: Vec<entity::navigation_item::Model>) -> Vec<NavigationItemDto> {
    let (parents, children): (Vec<_>, Vec<_>) =
        items.into_iter().partition(|item| item.parent_id.is_none());

    parents
        .into_iter()
        .map(|parent| {
            let nested = children
                .iter()
                .filter(|child| child.parent_id == Some(parent.id))
                .cloned()
                .map(|child| NavigationItemDto::from_entity(child, Vec::new()))
                .collect();
            NavigationItemDto::from_entity(parent, nested)
        })
        .collect()
}

/// Static navigation used when the database is unreachable.
pub fn fallback_items() -> Vec<NavigationItemDto> {
    let item = |id: i32, label: &str, href: &str, external: bool| NavigationItemDto {
        id,
        label: label.to_string(),
        href: href.to_string(),
        external,
        children: Vec::new(),
    };

    vec![
        item(1, "Home", "/", false),
        item(2, "Features", "/#features", false),
        item(3, "Plans", "/plans", false),
        item(4, "Blog", "/blog", false),
        item(5, "Team", "/team", false),
        item(6, "FAQ", "/faq", false),
        item(7, "Support", "/support", true),
    ]
}
