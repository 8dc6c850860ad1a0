use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

pub struct NavigationItemRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NavigationItemRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns all navigation items ordered by sort order. Parent/child
    /// assembly happens in the service layer.
    pub async fn get_all(&self) -> Result<Vec<entity::navigation_item::Model>, DbErr> {
        entity::prelude::NavigationItem::find()
            .order_by_asc(entity::navigation_item::Column::SortOrder)
            .all(self.db)
            .await
    }
}
