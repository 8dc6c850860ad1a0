use super::*;
use entity::prelude::Testimonial;

/// Tests that without a filter every testimonial is returned, best rated first.
#[tokio::test]
async fn orders_by_rating_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Testimonial)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let middling = factory::testimonial::TestimonialFactory::new(db)
        .rating(3)
        .build()
        .await?;
    let glowing = factory::testimonial::TestimonialFactory::new(db)
        .rating(5)
        .build()
        .await?;

    let repo = TestimonialRepository::new(db);
    let testimonials = repo.get_all(None).await?;

    assert_eq!(testimonials.len(), 2);
    assert_eq!(testimonials[0].id, glowing.id);
    assert_eq!(testimonials[1].id, middling.id);

    Ok(())
}

/// Tests the featured filter in both directions.
#[tokio::test]
async fn filters_by_featured_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Testimonial)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let featured = factory::testimonial::TestimonialFactory::new(db)
        .featured(true)
        .build()
        .await?;
    let regular = factory::create_testimonial(db).await?;

    let repo = TestimonialRepository::new(db);

    let only_featured = repo.get_all(Some(true)).await?;
    assert_eq!(only_featured.len(), 1);
    assert_eq!(only_featured[0].id, featured.id);

    let only_regular = repo.get_all(Some(false)).await?;
    assert_eq!(only_regular.len(), 1);
    assert_eq!(only_regular[0].id, regular.id);

    Ok(())
}
