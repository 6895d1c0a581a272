use super::*;

/// Tests creating a new giveaway record.
///
/// Verifies that the repository stores all snowflakes as strings, starts the
/// record uncompleted, and round-trips the end time exactly.
///
/// Expected: Ok with giveaway created
#[tokio::test]
async fn creates_giveaway_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_giveaway_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let params = create_params(500_000_000_000_000_001);
    let end_time = params.end_time;

    let repo = GiveawayRepository::new(db);
    let giveaway = repo.create(params).await?;

    assert_eq!(giveaway.message_id, "500000000000000001");
    assert_eq!(giveaway.case_id, "GIVE-CASE500000000000000001");
    assert_eq!(giveaway.channel_id, "500000000000000002");
    assert_eq!(giveaway.guild_id, "500000000000000003");
    assert_eq!(giveaway.host_id, "500000000000000004");
    assert_eq!(giveaway.host_name, "tester");
    assert_eq!(giveaway.prize, "Test prize");
    assert_eq!(giveaway.end_time, end_time);
    assert_eq!(giveaway.duration_seconds, 600);
    assert!(!giveaway.completed);

    Ok(())
}

/// Tests that the announcement message id is unique across records.
///
/// Expected: Err on the second insert with the same message id
#[tokio::test]
async fn rejects_duplicate_message_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_giveaway_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GiveawayRepository::new(db);
    repo.create(create_params(500_000_000_000_000_010)).await?;

    let mut duplicate = create_params(500_000_000_000_000_010);
    duplicate.case_id = "GIVE-OTHERCASE".to_string();
    let result = repo.create(duplicate).await;

    assert!(result.is_err());

    Ok(())
}
