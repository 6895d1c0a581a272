use super::*;

/// Tests recording a participant entry.
///
/// Expected: Ok(true) on first insert, entry listed afterwards
#[tokio::test]
async fn adds_entry_for_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_giveaway_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let giveaway = factory::giveaway::create_giveaway(db).await?;

    let repo = GiveawayRepository::new(db);
    let inserted = repo.add_entry(giveaway.id, 100_000_000_000_000_001).await?;

    assert!(inserted);
    assert_eq!(
        repo.entries(giveaway.id).await?,
        vec!["100000000000000001".to_string()]
    );

    Ok(())
}

/// Tests that a user cannot enter the same giveaway twice.
///
/// Expected: Ok(false) on the duplicate, single entry retained
#[tokio::test]
async fn ignores_duplicate_entries() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_giveaway_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let giveaway = factory::giveaway::create_giveaway(db).await?;

    let repo = GiveawayRepository::new(db);
    assert!(repo.add_entry(giveaway.id, 100_000_000_000_000_001).await?);
    assert!(!repo.add_entry(giveaway.id, 100_000_000_000_000_001).await?);

    assert_eq!(repo.entries(giveaway.id).await?.len(), 1);

    Ok(())
}

/// Tests removing a participant's entry.
///
/// Expected: Ok, entry no longer listed, other entries untouched
#[tokio::test]
async fn removes_entry_for_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_giveaway_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let giveaway = factory::giveaway::create_giveaway(db).await?;

    let repo = GiveawayRepository::new(db);
    repo.add_entry(giveaway.id, 100_000_000_000_000_001).await?;
    repo.add_entry(giveaway.id, 100_000_000_000_000_002).await?;

    repo.remove_entry(giveaway.id, 100_000_000_000_000_001)
        .await?;

    assert_eq!(
        repo.entries(giveaway.id).await?,
        vec!["100000000000000002".to_string()]
    );

    Ok(())
}

/// Tests that entries are scoped per giveaway.
///
/// Expected: each giveaway only lists its own entries
#[tokio::test]
async fn scopes_entries_per_giveaway() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_giveaway_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::giveaway::create_giveaway(db).await?;
    let second = factory::giveaway::create_giveaway(db).await?;

    let repo = GiveawayRepository::new(db);
    repo.add_entry(first.id, 100_000_000_000_000_001).await?;
    repo.add_entry(second.id, 100_000_000_000_000_002).await?;

    assert_eq!(
        repo.entries(first.id).await?,
        vec!["100000000000000001".to_string()]
    );
    assert_eq!(
        repo.entries(second.id).await?,
        vec!["100000000000000002".to_string()]
    );

    Ok(())
}
