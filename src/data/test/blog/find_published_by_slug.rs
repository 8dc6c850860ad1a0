use super::*;

/// Tests looking up a published post by its slug.
#[tokio::test]
async fn finds_published_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::blog::create_category(db).await?;
    let post = factory::blog::BlogPostFactory::new(db)
        .slug("launch-announcement")
        .category_id(category.id)
        .build()
        .await?;

    let repo = BlogPostRepository::new(db);
    let found = repo.find_published_by_slug("launch-announcement").await?;

    let (found_post, found_category) = found.expect("post should be found");
    assert_eq!(found_post.id, post.id);
    assert_eq!(found_category.unwrap().id, category.id);

    Ok(())
}

/// Tests that drafts are invisible through the slug lookup.
///
/// Expected: Ok(None) even though the row exists.
#[tokio::test]
async fn hides_unpublished_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::blog::BlogPostFactory::new(db)
        .slug("secret-draft")
        .published(false)
        .build()
        .await?;

    let repo = BlogPostRepository::new(db);
    let found = repo.find_published_by_slug("secret-draft").await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests the miss path for a slug that never existed.
#[tokio::test]
async fn returns_none_for_unknown_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BlogPostRepository::new(db);
    let found = repo.find_published_by_slug("does-not-exist").await?;

    assert!(found.is_none());

    Ok(())
}
