use sea_orm::DatabaseConnection;

use crate::{data::faq::FaqRepository, error::AppError, model::faq::FaqEntryDto};

pub struct FaqService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FaqService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, search: Option<&str>) -> Result<Vec<FaqEntryDto>, AppError> {
        let repo = FaqRepository::new(self.db);

        let entries = repo.get_published(search).await?;

        Ok(entries.into_iter().map(FaqEntryDto::from_entity).collect())
    }
}
