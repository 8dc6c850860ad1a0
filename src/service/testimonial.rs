use sea_orm::DatabaseConnection;

use crate::{
    data::testimonial::TestimonialRepository, error::AppError, model::testimonial::TestimonialDto,
};

pub struct TestimonialService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TestimonialService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, featured: Option<bool>) -> Result<Vec<TestimonialDto>, AppError> {
        let repo = TestimonialRepository::new(self.db);

        let testimonials = repo.get_all(featured).await?;

        Ok(testimonials
            .into_iter()
            .map(TestimonialDto::from_entity)
            .collect())
    }
}
