use super::*;

/// Tests looking up a giveaway by its operator-facing case id.
///
/// Expected: Ok(Some) with the matching record
#[tokio::test]
async fn finds_giveaway_by_case_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_giveaway_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seeded = factory::giveaway::GiveawayFactory::new(db)
        .case_id("GIVE-LOOKUP0001")
        .build()
        .await?;

    let repo = GiveawayRepository::new(db);
    let found = repo.get_by_case_id("GIVE-LOOKUP0001").await?;

    assert_eq!(found.map(|g| g.id), Some(seeded.id));

    Ok(())
}

/// Tests looking up an unknown case id.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_case_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_giveaway_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::giveaway::create_giveaway(db).await?;

    let repo = GiveawayRepository::new(db);
    let found = repo.get_by_case_id("GIVE-DOESNOTEXIST").await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests looking up a giveaway by its announcement message id.
///
/// Expected: Ok(Some) with the matching record
#[tokio::test]
async fn finds_giveaway_by_message_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_giveaway_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seeded = factory::giveaway::GiveawayFactory::new(db)
        .message_id("500000000000000042")
        .build()
        .await?;

    let repo = GiveawayRepository::new(db);
    let found = repo.get_by_message_id(500_000_000_000_000_042).await?;

    assert_eq!(found.map(|g| g.id), Some(seeded.id));

    Ok(())
}
