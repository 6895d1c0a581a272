use super::*;

/// Tests that only unfinished giveaways are listed.
///
/// Expected: Ok with completed records filtered out
#[tokio::test]
async fn lists_only_incomplete_giveaways() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_giveaway_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let running = factory::giveaway::GiveawayFactory::new(db)
        .completed(false)
        .build()
        .await?;
    factory::giveaway::GiveawayFactory::new(db)
        .completed(true)
        .build()
        .await?;

    let repo = GiveawayRepository::new(db);
    let incomplete = repo.list_incomplete().await?;

    assert_eq!(incomplete.len(), 1);
    assert_eq!(incomplete[0].id, running.id);

    Ok(())
}

/// Tests that unfinished giveaways come back soonest-ending first.
///
/// Expected: Ok with records ordered by end time ascending
#[tokio::test]
async fn orders_by_end_time_ascending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_giveaway_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let later = factory::giveaway::GiveawayFactory::new(db)
        .end_time(Utc::now() + Duration::hours(2))
        .build()
        .await?;
    let sooner = factory::giveaway::GiveawayFactory::new(db)
        .end_time(Utc::now() + Duration::minutes(5))
        .build()
        .await?;

    let repo = GiveawayRepository::new(db);
    let incomplete = repo.list_incomplete().await?;

    assert_eq!(
        incomplete.iter().map(|g| g.id).collect::<Vec<_>>(),
        vec![sooner.id, later.id]
    );

    Ok(())
}

/// Tests the empty store case.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_list_without_records() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_giveaway_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GiveawayRepository::new(db);
    let incomplete = repo.list_incomplete().await?;

    assert!(incomplete.is_empty());

    Ok(())
}
