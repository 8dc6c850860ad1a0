use sea_orm::DatabaseConnection;

use crate::{data::partner::PartnerRepository, error::AppError, model::partner::PartnerDto};

pub struct PartnerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PartnerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, tier: Option<&str>) -> Result<Vec<PartnerDto>, AppError> {
        let repo = PartnerRepository::new(self.db);

        let partners = repo.get_active(tier).await?;

        Ok(partners.into_iter().map(PartnerDto::from_entity).collect())
    }
}
