use super::*;

/// Tests moving a giveaway's end time forward.
///
/// Expected: Ok with the new end time persisted exactly
#[tokio::test]
async fn updates_end_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_giveaway_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let giveaway = factory::giveaway::create_giveaway(db).await?;
    let new_end_time = giveaway.end_time + Duration::minutes(30);

    let repo = GiveawayRepository::new(db);
    let updated = repo.set_end_time(giveaway.id, new_end_time).await?;

    assert_eq!(updated.end_time, new_end_time);

    let reloaded = repo.get_by_id(giveaway.id).await?.unwrap();
    assert_eq!(reloaded.end_time, new_end_time);

    Ok(())
}

/// Tests updating a giveaway that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn errors_for_unknown_giveaway() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_giveaway_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GiveawayRepository::new(db);
    let result = repo.set_end_time(9999, Utc::now()).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
