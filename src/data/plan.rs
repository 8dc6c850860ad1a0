use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

pub struct PricingPlanRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PricingPlanRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::pricing_plan::Model>, DbErr> {
        entity::prelude::PricingPlan::find()
            .order_by_asc(entity::pricing_plan::Column::SortOrder)
            .all(self.db)
            .await
    }
}
