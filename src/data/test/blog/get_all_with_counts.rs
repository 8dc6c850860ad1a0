use super::*;

/// Tests that category counts only include published posts.
#[tokio::test]
async fn counts_only_published_posts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::blog::create_category(db).await?;
    factory::blog::create_post(db, Some(category.id)).await?;
    factory::blog::create_post(db, Some(category.id)).await?;
    factory::blog::BlogPostFactory::new(db)
        .category_id(category.id)
        .published(false)
        .build()
        .await?;

    let repo = BlogCategoryRepository::new(db);
    let categories = repo.get_all_with_counts().await?;

    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].0.id, category.id);
    assert_eq!(categories[0].1, 2);

    Ok(())
}

/// Tests that empty categories still appear, with a zero count.
#[tokio::test]
async fn includes_empty_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::blog::create_category(db).await?;

    let repo = BlogCategoryRepository::new(db);
    let categories = repo.get_all_with_counts().await?;

    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].1, 0);

    Ok(())
}
