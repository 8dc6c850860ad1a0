use super::*;
use entity::prelude::FaqEntry;

/// Tests that unpublished entries are excluded and order follows sort_order.
#[tokio::test]
async fn returns_published_in_sort_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(FaqEntry).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let second = factory::faq::FaqEntryFactory::new(db).sort_order(2).build().await?;
    let first = factory::faq::FaqEntryFactory::new(db).sort_order(1).build().await?;
    factory::faq::FaqEntryFactory::new(db)
        .published(false)
        .build()
        .await?;

    let repo = FaqRepository::new(db);
    let entries = repo.get_published(None).await?;

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].id, first.id);
    assert_eq!(entries[1].id, second.id);

    Ok(())
}

/// Tests case-insensitive search across question and answer text.
#[tokio::test]
async fn searches_question_and_answer() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(FaqEntry).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let by_question = factory::faq::FaqEntryFactory::new(db)
        .question("How do I set up Welcome Messages?")
        .answer("Use the dashboard.")
        .build()
        .await?;
    let by_answer = factory::faq::FaqEntryFactory::new(db)
        .question("Is there a free plan?")
        .answer("Yes, welcome messages are included for free.")
        .build()
        .await?;
    factory::faq::FaqEntryFactory::new(db)
        .question("How many shards does the bot run?")
        .answer("Depends on guild count.")
        .build()
        .await?;

    let repo = FaqRepository::new(db);
    let entries = repo.get_published(Some("WELCOME")).await?;

    let ids: Vec<i32> = entries.iter().map(|entry| entry.id).collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&by_question.id));
    assert!(ids.contains(&by_answer.id));

    Ok(())
}
