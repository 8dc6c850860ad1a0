use sea_orm::DatabaseConnection;

use crate::{
    data::blog::{BlogCategoryRepository, BlogPostFilter, BlogPostRepository},
    error::AppError,
    model::{
        api::ApiMeta,
        blog::{BlogCategoryDto, BlogPostDto, BlogPostSummaryDto},
    },
};

pub struct BlogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BlogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns a page of published posts plus pagination metadata.
    pub async fn list(
        &self,
        filter: BlogPostFilter,
    ) -> Result<(Vec<BlogPostSummaryDto>, ApiMeta), AppError> {
        let repo = BlogPostRepository::new(self.db);

        let (rows, total) = repo.list_published(&filter).await?;

        let total_pages = (total as f64 / filter.per_page as f64).ceil() as u64;
        let meta = ApiMeta::pagination(total, filter.page, filter.per_page, total_pages);

        let posts = rows
            .into_iter()
            .map(|(post, category)| BlogPostSummaryDto::from_entity(post, category))
            .collect();

        Ok((posts, meta))
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<BlogPostDto>, AppError> {
        let repo = BlogPostRepository::new(self.db);

        let row = repo.find_published_by_slug(slug).await?;

        Ok(row.map(|(post, category)| BlogPostDto::from_entity(post, category)))
    }

    pub async fn categories(&self) -> Result<Vec<BlogCategoryDto>, AppError> {
        let repo = BlogCategoryRepository::new(self.db);

        let categories = repo.get_all_with_counts().await?;

        Ok(categories
            .into_iter()
            .map(|(category, count)| BlogCategoryDto::from_entity(category, count))
            .collect())
    }
}
