use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Testimonial::Table)
                    .if_not_exists()
                    .col(pk_auto(Testimonial::Id))
                    .col(string(Testimonial::AuthorName))
                    .col(string_null(Testimonial::AuthorTitle))
                    .col(string_null(Testimonial::AvatarUrl))
                    .col(text(Testimonial::Content))
                    .col(integer(Testimonial::Rating))
                    .col(boolean(Testimonial::Featured))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Testimonial::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Testimonial {
    Table,
    Id,
    AuthorName,
    AuthorTitle,
    AvatarUrl,
    Content,
    Rating,
    Featured,
}
