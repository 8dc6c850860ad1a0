//! Blog repositories for posts and categories.

use sea_orm::{
    sea_query::{Expr, Func},
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

/// Filters for the published-post listing.
#[derive(Debug, Clone, Default)]
pub struct BlogPostFilter {
    pub category_id: Option<i32>,
    pub search: Option<String>,
    pub page: u64,
    pub per_page: u64,
}

pub struct BlogPostRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BlogPostRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns a page of published posts with their categories, newest first.
    ///
    /// The search term matches case-insensitively against title and excerpt;
    /// both sides are lowered explicitly so the behavior does not depend on
    /// database collation.
    ///
    /// # Returns
    /// - `Ok((rows, total))` - Page of `(post, category)` pairs and the total
    ///   number of matching posts across all pages
    /// - `Err(DbErr)` - Database error during query
    pub async fn list_published(
        &self,
        filter: &BlogPostFilter,
    ) -> Result<
        (
            Vec<(
                entity::blog_post::Model,
                Option<entity::blog_category::Model>,
            )>,
            u64,
        ),
        DbErr,
    > {
        let mut query = entity::prelude::BlogPost::find()
            .filter(entity::blog_post::Column::Published.eq(true));

        if let Some(category_id) = filter.category_id {
            query = query.filter(entity::blog_post::Column::CategoryId.eq(category_id));
        }

        if let Some(term) = filter.search.as_deref() {
            let pattern = format!("%{}%", term.to_lowercase());
            query = query.filter(
                Condition::any()
                    .add(
                        Expr::expr(Func::lower(Expr::col(entity::blog_post::Column::Title)))
                            .like(pattern.clone()),
                    )
                    .add(
                        Expr::expr(Func::lower(Expr::col(entity::blog_post::Column::Excerpt)))
                            .like(pattern),
                    ),
            );
        }

        let paginator = query
            .order_by_desc(entity::blog_post::Column::PublishedAt)
            .find_also_related(entity::prelude::BlogCategory)
            .paginate(self.db, filter.per_page);

        let total = paginator.num_items().await?;
        // fetch_page is zero-based; the API page parameter is one-based
        let rows = paginator.fetch_page(filter.page.saturating_sub(1)).await?;

        Ok((rows, total))
    }

    /// Finds a single published post by slug with its category.
    pub async fn find_published_by_slug(
        &self,
        slug: &str,
    ) -> Result<
        Option<(
            entity::blog_post::Model,
            Option<entity::blog_category::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::BlogPost::find()
            .filter(entity::blog_post::Column::Slug.eq(slug))
            .filter(entity::blog_post::Column::Published.eq(true))
            .find_also_related(entity::prelude::BlogCategory)
            .one(self.db)
            .await
    }
}

pub struct BlogCategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BlogCategoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns all categories with their published-post counts, ordered by name.
    pub async fn get_all_with_counts(
        &self,
    ) -> Result<Vec<(entity::blog_category::Model, u64)>, DbErr> {
        let categories = entity::prelude::BlogCategory::find()
            .order_by_asc(entity::blog_category::Column::Name)
            .all(self.db)
            .await?;

        let mut result = Vec::with_capacity(categories.len());
        for category in categories {
            let count = entity::prelude::BlogPost::find()
                .filter(entity::blog_post::Column::CategoryId.eq(category.id))
                .filter(entity::blog_post::Column::Published.eq(true))
                .count(self.db)
                .await?;
            result.push((category, count));
        }

        Ok(result)
    }
}
