//! Factories for blog categories and posts.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct BlogCategoryFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    slug: String,
    description: Option<String>,
}

impl<'a> BlogCategoryFactory<'a> {
    /// Defaults: name `"Category {id}"`, slug `"category-{id}"`, no description.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Category {}", id),
            slug: format!("category-{}", id),
            description: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub async fn build(self) -> Result<entity::blog_category::Model, DbErr> {
        entity::blog_category::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            slug: ActiveValue::Set(self.slug),
            description: ActiveValue::Set(self.description),
        }
        .insert(self.db)
        .await
    }
}

/// Factory for creating test blog posts.
///
/// Posts default to published with `published_at` set to now; use
/// `.published(false)` for drafts.
pub struct BlogPostFactory<'a> {
    db: &'a DatabaseConnection,
    category_id: Option<i32>,
    title: String,
    slug: String,
    excerpt: String,
    content: String,
    author: String,
    published: bool,
}

impl<'a> BlogPostFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            category_id: None,
            title: format!("Post {}", id),
            slug: format!("post-{}", id),
            excerpt: format!("Excerpt for post {}", id),
            content: format!("Content for post {}", id),
            author: "Nyxara Team".to_string(),
            published: true,
        }
    }

    pub fn category_id(mut self, category_id: i32) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }

    pub async fn build(self) -> Result<entity::blog_post::Model, DbErr> {
        let now = Utc::now();
        entity::blog_post::ActiveModel {
            id: ActiveValue::NotSet,
            category_id: ActiveValue::Set(self.category_id),
            title: ActiveValue::Set(self.title),
            slug: ActiveValue::Set(self.slug),
            excerpt: ActiveValue::Set(self.excerpt),
            content: ActiveValue::Set(self.content),
            author: ActiveValue::Set(self.author),
            image_url: ActiveValue::Set(None),
            published: ActiveValue::Set(self.published),
            published_at: ActiveValue::Set(self.published.then_some(now)),
            created_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a blog category with default values.
pub async fn create_category(
    db: &DatabaseConnection,
) -> Result<entity::blog_category::Model, DbErr> {
    BlogCategoryFactory::new(db).build().await
}

/// Creates a published blog post, optionally in a category.
pub async fn create_post(
    db: &DatabaseConnection,
    category_id: Option<i32>,
) -> Result<entity::blog_post::Model, DbErr> {
    let mut factory = BlogPostFactory::new(db);
    if let Some(category_id) = category_id {
        factory = factory.category_id(category_id);
    }
    factory.build().await
}
