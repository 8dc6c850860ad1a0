use super::*;

fn filter() -> BlogPostFilter {
    BlogPostFilter {
        category_id: None,
        search: None,
        page: 1,
        per_page: 10,
    }
}

/// Tests that unpublished posts never appear in the listing.
///
/// Expected: only the published post is returned and counted.
#[tokio::test]
async fn excludes_unpublished_posts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let published = factory::blog::create_post(db, None).await?;
    factory::blog::BlogPostFactory::new(db)
        .published(false)
        .build()
        .await?;

    let repo = BlogPostRepository::new(db);
    let (rows, total) = repo.list_published(&filter()).await?;

    assert_eq!(total, 1);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].0.id, published.id);

    Ok(())
}

/// Tests filtering the listing by category.
#[tokio::test]
async fn filters_by_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::blog::create_category(db).await?;
    let in_category = factory::blog::create_post(db, Some(category.id)).await?;
    factory::blog::create_post(db, None).await?;

    let repo = BlogPostRepository::new(db);
    let (rows, total) = repo
        .list_published(&BlogPostFilter {
            category_id: Some(category.id),
            ..filter()
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(rows[0].0.id, in_category.id);
    // The category row rides along via the relation
    assert_eq!(rows[0].1.as_ref().unwrap().id, category.id);

    Ok(())
}

/// Tests that the search term matches titles case-insensitively.
#[tokio::test]
async fn searches_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let matching = factory::blog::BlogPostFactory::new(db)
        .title("Moderation Deep Dive")
        .build()
        .await?;
    factory::blog::BlogPostFactory::new(db)
        .title("Release Notes")
        .excerpt("Nothing relevant here")
        .build()
        .await?;

    let repo = BlogPostRepository::new(db);
    let (rows, total) = repo
        .list_published(&BlogPostFilter {
            search: Some("MODERATION".to_string()),
            ..filter()
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(rows[0].0.id, matching.id);

    Ok(())
}

/// Tests that the search term also matches excerpts.
#[tokio::test]
async fn searches_excerpts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let matching = factory::blog::BlogPostFactory::new(db)
        .title("Release Notes")
        .excerpt("New auto-moderation rules explained")
        .build()
        .await?;

    let repo = BlogPostRepository::new(db);
    let (rows, total) = repo
        .list_published(&BlogPostFilter {
            search: Some("auto-moderation".to_string()),
            ..filter()
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(rows[0].0.id, matching.id);

    Ok(())
}

/// Tests one-based pagination: the total counts every match while each page
/// holds at most `per_page` rows.
#[tokio::test]
async fn paginates_with_one_based_pages() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::blog::create_post(db, None).await?;
    }

    let repo = BlogPostRepository::new(db);

    let (page_one, total) = repo
        .list_published(&BlogPostFilter {
            page: 1,
            per_page: 2,
            ..filter()
        })
        .await?;
    assert_eq!(total, 3);
    assert_eq!(page_one.len(), 2);

    let (page_two, _) = repo
        .list_published(&BlogPostFilter {
            page: 2,
            per_page: 2,
            ..filter()
        })
        .await?;
    assert_eq!(page_two.len(), 1);

    Ok(())
}
