use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NavigationItem::Table)
                    .if_not_exists()
                    .col(pk_auto(NavigationItem::Id))
                    .col(string(NavigationItem::Label))
                    .col(string(NavigationItem::Href))
                    .col(integer_null(NavigationItem::ParentId))
                    .col(integer(NavigationItem::SortOrder))
                    .col(boolean(NavigationItem::External))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NavigationItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum NavigationItem {
    Table,
    Id,
    Label,
    Href,
    ParentId,
    SortOrder,
    External,
}
