use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Blog post as returned by the list endpoint. Omits the full body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BlogPostSummaryDto {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub author: String,
    pub image_url: Option<String>,
    pub category: Option<BlogCategoryRefDto>,
    pub published_at: Option<DateTime<Utc>>,
}

impl BlogPostSummaryDto {
    pub fn from_entity(
        post: entity::blog_post::Model,
        category: Option<entity::blog_category::Model>,
    ) -> Self {
        Self {
            id: post.id,
            title: post.title,
            slug: post.slug,
            excerpt: post.excerpt,
            author: post.author,
            image_url: post.image_url,
            category: category.map(BlogCategoryRefDto::from_entity),
            published_at: post.published_at,
        }
    }
}

/// Full blog post, returned by the slug lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BlogPostDto {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub image_url: Option<String>,
    pub category: Option<BlogCategoryRefDto>,
    pub published_at: Option<DateTime<Utc>>,
}

impl BlogPostDto {
    pub fn from_entity(
        post: entity::blog_post::Model,
        category: Option<entity::blog_category::Model>,
    ) -> Self {
        Self {
            id: post.id,
            title: post.title,
            slug: post.slug,
            excerpt: post.excerpt,
            content: post.content,
            author: post.author,
            image_url: post.image_url,
            category: category.map(BlogCategoryRefDto::from_entity),
            published_at: post.published_at,
        }
    }
}

/// Category reference embedded in post payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BlogCategoryRefDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
}

impl BlogCategoryRefDto {
    pub fn from_entity(category: entity::blog_category::Model) -> Self {
        Self {
            id: category.id,
            name: category.name,
            slug: category.slug,
        }
    }
}

/// Category with its published-post count, for the category listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BlogCategoryDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub post_count: u64,
}

impl BlogCategoryDto {
    pub fn from_entity(category: entity::blog_category::Model, post_count: u64) -> Self {
        Self {
            id: category.id,
            name: category.name,
            slug: category.slug,
            description: category.description,
            post_count,
        }
    }
}
