use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct TestimonialRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TestimonialRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(
        &self,
        featured: Option<bool>,
    ) -> Result<Vec<entity::testimonial::Model>, DbErr> {
        let mut query = entity::prelude::Testimonial::find();

        if let Some(featured) = featured {
            query = query.filter(entity::testimonial::Column::Featured.eq(featured));
        }

        query
            .order_by_desc(entity::testimonial::Column::Rating)
            .all(self.db)
            .await
    }
}
