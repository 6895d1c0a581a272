use super::*;

/// Tests marking a giveaway as finalized.
///
/// Expected: Ok with `completed` persisted as true
#[tokio::test]
async fn marks_giveaway_completed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_giveaway_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let giveaway = factory::giveaway::create_giveaway(db).await?;
    assert!(!giveaway.completed);

    let repo = GiveawayRepository::new(db);
    let updated = repo.mark_completed(giveaway.id).await?;

    assert!(updated.completed);

    let reloaded = repo.get_by_id(giveaway.id).await?.unwrap();
    assert!(reloaded.completed);

    Ok(())
}

/// Tests that marking an already-completed giveaway stays completed.
///
/// Expected: Ok, `completed` remains true
#[tokio::test]
async fn is_idempotent_for_completed_giveaways() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_giveaway_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let giveaway = factory::giveaway::GiveawayFactory::new(db)
        .completed(true)
        .build()
        .await?;

    let repo = GiveawayRepository::new(db);
    let updated = repo.mark_completed(giveaway.id).await?;

    assert!(updated.completed);

    Ok(())
}
