use sea_orm_migration::{prelude::*, schema::*};

use super::m20260110_000002_create_blog_category_table::BlogCategory;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlogPost::Table)
                    .if_not_exists()
                    .col(pk_auto(BlogPost::Id))
                    .col(integer_null(BlogPost::CategoryId))
                    .col(string(BlogPost::Title))
                    .col(string_uniq(BlogPost::Slug))
                    .col(string(BlogPost::Excerpt))
                    .col(text(BlogPost::Content))
                    .col(string(BlogPost::Author))
                    .col(string_null(BlogPost::ImageUrl))
                    .col(boolean(BlogPost::Published))
                    .col(timestamp_null(BlogPost::PublishedAt))
                    .col(timestamp(BlogPost::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blog_post_category_id")
                            .from(BlogPost::Table, BlogPost::CategoryId)
                            .to(BlogCategory::Table, BlogCategory::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BlogPost::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BlogPost {
    Table,
    Id,
    CategoryId,
    Title,
    Slug,
    Excerpt,
    Content,
    Author,
    ImageUrl,
    Published,
    PublishedAt,
    CreatedAt,
}
