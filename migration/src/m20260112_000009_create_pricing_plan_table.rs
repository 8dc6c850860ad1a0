use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PricingPlan::Table)
                    .if_not_exists()
                    .col(pk_auto(PricingPlan::Id))
                    .col(string(PricingPlan::Name))
                    .col(string(PricingPlan::Tier))
                    .col(integer(PricingPlan::PriceCents))
                    .col(string(PricingPlan::Period))
                    .col(text(PricingPlan::Features))
                    .col(boolean(PricingPlan::Highlighted))
                    .col(string(PricingPlan::CtaLabel))
                    .col(string(PricingPlan::CtaUrl))
                    .col(integer(PricingPlan::SortOrder))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PricingPlan::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PricingPlan {
    Table,
    Id,
    Name,
    Tier,
    PriceCents,
    Period,
    Features,
    Highlighted,
    CtaLabel,
    CtaUrl,
    SortOrder,
}
