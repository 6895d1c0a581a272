//! Giveaway factory for creating test giveaway entities.
//!
//! Provides factory methods for creating giveaway records and entries with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::{next_id, next_snowflake};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test giveaways with customizable fields.
///
/// Defaults describe an active giveaway ending ten minutes from now with a
/// unique message id and case id.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::giveaway::GiveawayFactory;
///
/// let giveaway = GiveawayFactory::new(&db)
///     .prize("Custom prize")
///     .completed(true)
///     .build()
///     .await?;
/// ```
pub struct GiveawayFactory<'a> {
    db: &'a DatabaseConnection,
    message_id: String,
    case_id: String,
    channel_id: String,
    guild_id: String,
    host_id: String,
    host_name: String,
    prize: String,
    end_time: DateTime<Utc>,
    duration_seconds: i64,
    completed: bool,
}

impl<'a> GiveawayFactory<'a> {
    /// Creates a new GiveawayFactory with default values.
    ///
    /// Defaults:
    /// - message_id / channel_id / guild_id / host_id: unique snowflake strings
    /// - case_id: `"GIVE-TEST{n}"` where n is auto-incremented
    /// - prize: `"Test prize {n}"`
    /// - end_time: 10 minutes from now
    /// - duration_seconds: `600`
    /// - completed: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            message_id: next_snowflake(),
            case_id: format!("GIVE-TEST{:06}", id),
            channel_id: next_snowflake(),
            guild_id: next_snowflake(),
            host_id: next_snowflake(),
            host_name: format!("host_{}", id),
            prize: format!("Test prize {}", id),
            end_time: Utc::now() + chrono::Duration::minutes(10),
            duration_seconds: 600,
            completed: false,
        }
    }

    /// Sets the announcement message id.
    pub fn message_id(mut self, message_id: impl Into<String>) -> Self {
        self.message_id = message_id.into();
        self
    }

    /// Sets the operator-facing case id.
    pub fn case_id(mut self, case_id: impl Into<String>) -> Self {
        self.case_id = case_id.into();
        self
    }

    /// Sets the channel id the announcement message lives in.
    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = channel_id.into();
        self
    }

    /// Sets the prize text.
    pub fn prize(mut self, prize: impl Into<String>) -> Self {
        self.prize = prize.into();
        self
    }

    /// Sets when the giveaway concludes.
    pub fn end_time(mut self, end_time: DateTime<Utc>) -> Self {
        self.end_time = end_time;
        self
    }

    /// Sets the originally requested duration in seconds.
    pub fn duration_seconds(mut self, duration_seconds: i64) -> Self {
        self.duration_seconds = duration_seconds;
        self
    }

    /// Sets whether the giveaway has already been finalized.
    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Builds and inserts the giveaway entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::giveaway::Model)` - Created giveaway entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::giveaway::Model, DbErr> {
        entity::giveaway::ActiveModel {
            id: ActiveValue::NotSet,
            message_id: ActiveValue::Set(self.message_id),
            case_id: ActiveValue::Set(self.case_id),
            channel_id: ActiveValue::Set(self.channel_id),
            guild_id: ActiveValue::Set(self.guild_id),
            host_id: ActiveValue::Set(self.host_id),
            host_name: ActiveValue::Set(self.host_name),
            prize: ActiveValue::Set(self.prize),
            end_time: ActiveValue::Set(self.end_time),
            duration_seconds: ActiveValue::Set(self.duration_seconds),
            completed: ActiveValue::Set(self.completed),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a giveaway with default values.
///
/// Shorthand for `GiveawayFactory::new(db).build().await`.
pub async fn create_giveaway(db: &DatabaseConnection) -> Result<entity::giveaway::Model, DbErr> {
    GiveawayFactory::new(db).build().await
}

/// Inserts an entry row for the given giveaway and user.
pub async fn create_entry(
    db: &DatabaseConnection,
    giveaway_id: i32,
    user_id: impl Into<String>,
) -> Result<entity::giveaway_entry::Model, DbErr> {
    entity::giveaway_entry::ActiveModel {
        id: ActiveValue::NotSet,
        giveaway_id: ActiveValue::Set(giveaway_id),
        user_id: ActiveValue::Set(user_id.into()),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;

    #[tokio::test]
    async fn creates_giveaway_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_giveaway_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let giveaway = create_giveaway(db).await?;

        assert!(giveaway.case_id.starts_with("GIVE-"));
        assert!(!giveaway.completed);
        assert_eq!(giveaway.duration_seconds, 600);
        assert!(giveaway.end_time > Utc::now());

        Ok(())
    }

    #[tokio::test]
    async fn creates_giveaway_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_giveaway_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let end_time = Utc::now() - chrono::Duration::minutes(5);
        let giveaway = GiveawayFactory::new(db)
            .prize("Nitro")
            .end_time(end_time)
            .completed(true)
            .build()
            .await?;

        assert_eq!(giveaway.prize, "Nitro");
        assert_eq!(giveaway.end_time, end_time);
        assert!(giveaway.completed);

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_giveaways() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_giveaway_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_giveaway(db).await?;
        let second = create_giveaway(db).await?;

        assert_ne!(first.id, second.id);
        assert_ne!(first.message_id, second.message_id);
        assert_ne!(first.case_id, second.case_id);

        Ok(())
    }

    #[tokio::test]
    async fn creates_entries_for_giveaway() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_giveaway_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let giveaway = create_giveaway(db).await?;
        let entry = create_entry(db, giveaway.id, "100000000000000001").await?;

        assert_eq!(entry.giveaway_id, giveaway.id);
        assert_eq!(entry.user_id, "100000000000000001");

        Ok(())
    }
}
