use crate::{model::api::DataSource, service::navigation::NavigationService};
use entity::prelude::NavigationItem;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, context::TestContext, factory};

/// Tests that child items are nested under their parent in the tree.
#[tokio::test]
async fn nests_children_under_parents() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(NavigationItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let parent = factory::navigation::NavigationItemFactory::new(db)
        .label("Resources")
        .href("/resources")
        .build()
        .await?;
    factory::navigation::NavigationItemFactory::new(db)
        .label("Guides")
        .href("/resources/guides")
        .parent_id(parent.id)
        .build()
        .await?;
    factory::navigation::NavigationItemFactory::new(db)
        .label("Changelog")
        .href("/resources/changelog")
        .parent_id(parent.id)
        .build()
        .await?;

    let service = NavigationService::new(db);
    let (items, source) = service.items().await;

    assert_eq!(source, DataSource::Database);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].label, "Resources");
    assert_eq!(items[0].children.len(), 2);
    assert!(items[0].children.iter().all(|child| child.children.is_empty()));

    Ok(())
}

/// Tests that top-level items without children still appear with an empty
/// child list.
#[tokio::test]
async fn keeps_childless_items_top_level() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(NavigationItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::navigation::NavigationItemFactory::new(db)
        .label("Home")
        .href("/")
        .build()
        .await?;

    let service = NavigationService::new(db);
    let (items, _) = service.items().await;

    assert_eq!(items.len(), 1);
    assert!(items[0].children.is_empty());

    Ok(())
}

/// Tests the fallback path when the navigation table is missing.
///
/// Expected: the static item set, tagged as fallback.
#[tokio::test]
async fn substitutes_fallback_when_database_fails() {
    let mut test = TestContext::new();
    let db = test.database().await.unwrap();

    let service = NavigationService::new(db);
    let (items, source) = service.items().await;

    assert_eq!(source, DataSource::Fallback);
    assert!(items.iter().any(|item| item.label == "Home"));
}
