use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlogCategory::Table)
                    .if_not_exists()
                    .col(pk_auto(BlogCategory::Id))
                    .col(string(BlogCategory::Name))
                    .col(string_uniq(BlogCategory::Slug))
                    .col(string_null(BlogCategory::Description))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BlogCategory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BlogCategory {
    Table,
    Id,
    Name,
    Slug,
    Description,
}
