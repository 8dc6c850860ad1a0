use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct PartnerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PartnerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns active partners ordered by tier then name, optionally limited to
    /// a single tier.
    pub async fn get_active(&self, tier: Option<&str>) -> Result<Vec<entity::partner::Model>, DbErr> {
        let mut query =
            entity::prelude::Partner::find().filter(entity::partner::Column::Active.eq(true));

        if let Some(tier) = tier {
            query = query.filter(entity::partner::Column::Tier.eq(tier));
        }

        query
            .order_by_asc(entity::partner::Column::Tier)
            .order_by_asc(entity::partner::Column::Name)
            .all(self.db)
            .await
    }
}
