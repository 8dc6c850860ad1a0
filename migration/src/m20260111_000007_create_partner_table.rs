use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Partner::Table)
                    .if_not_exists()
                    .col(pk_auto(Partner::Id))
                    .col(string(Partner::Name))
                    .col(string(Partner::Tier))
                    .col(string_null(Partner::WebsiteUrl))
                    .col(string_null(Partner::LogoUrl))
                    .col(text_null(Partner::Description))
                    .col(boolean(Partner::Active))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Partner::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Partner {
    Table,
    Id,
    Name,
    Tier,
    WebsiteUrl,
    LogoUrl,
    Description,
    Active,
}
