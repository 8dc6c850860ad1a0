use super::*;
use entity::prelude::NavigationItem;

/// Tests that items come back ordered by sort_order regardless of insert order.
#[tokio::test]
async fn orders_by_sort_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(NavigationItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let last = factory::navigation::NavigationItemFactory::new(db)
        .sort_order(5)
        .build()
        .await?;
    let first = factory::navigation::NavigationItemFactory::new(db)
        .sort_order(1)
        .build()
        .await?;

    let repo = NavigationItemRepository::new(db);
    let items = repo.get_all().await?;

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, first.id);
    assert_eq!(items[1].id, last.id);

    Ok(())
}

/// Tests that child items keep their parent reference.
#[tokio::test]
async fn preserves_parent_references() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(NavigationItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let parent = factory::navigation::create_navigation_item(db).await?;
    let child = factory::navigation::NavigationItemFactory::new(db)
        .parent_id(parent.id)
        .build()
        .await?;

    let repo = NavigationItemRepository::new(db);
    let items = repo.get_all().await?;

    let stored_child = items.iter().find(|item| item.id == child.id).unwrap();
    assert_eq!(stored_child.parent_id, Some(parent.id));

    Ok(())
}
