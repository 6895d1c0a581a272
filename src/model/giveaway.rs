//! Domain models for giveaway data operations.

use chrono::{DateTime, Utc};

/// A running or concluded giveaway.
///
/// Mirrors the persisted record; `end_time` is the single source of truth for
/// remaining time and only ever moves forward.
#[derive(Debug, Clone, PartialEq)]
pub struct Giveaway {
    /// Surrogate key of the persisted record.
    pub id: i32,
    /// Snowflake of the announcement message (stored as String).
    pub message_id: String,
    /// Short operator-facing identifier used for extend/reroll lookups.
    pub case_id: String,
    /// Channel the announcement message lives in (stored as String).
    pub channel_id: String,
    /// Guild the giveaway was started in (stored as String).
    pub guild_id: String,
    /// Discord ID of the hosting user (stored as String).
    pub host_id: String,
    /// Display name of the hosting user at start time.
    pub host_name: String,
    /// Prize text, 2-100 characters.
    pub prize: String,
    /// When the giveaway concludes.
    pub end_time: DateTime<Utc>,
    /// Originally requested duration, retained for display.
    pub duration_seconds: i64,
    /// Whether the giveaway has been finalized.
    pub completed: bool,
    /// Timestamp when the giveaway was created.
    pub created_at: DateTime<Utc>,
}

impl Giveaway {
    /// Converts an entity model to a giveaway domain model at the repository boundary.
    pub fn from_entity(entity: entity::giveaway::Model) -> Self {
        Self {
            id: entity.id,
            message_id: entity.message_id,
            case_id: entity.case_id,
            channel_id: entity.channel_id,
            guild_id: entity.guild_id,
            host_id: entity.host_id,
            host_name: entity.host_name,
            prize: entity.prize,
            end_time: entity.end_time,
            duration_seconds: entity.duration_seconds,
            completed: entity.completed,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for persisting a freshly posted giveaway.
///
/// Snowflakes arrive as u64 from the Discord layer and are stored as strings.
#[derive(Debug, Clone)]
pub struct CreateGiveawayParams {
    /// Snowflake of the already-posted announcement message.
    pub message_id: u64,
    /// Freshly generated case id.
    pub case_id: String,
    /// Channel the announcement was posted to.
    pub channel_id: u64,
    /// Guild the giveaway belongs to.
    pub guild_id: u64,
    /// Discord ID of the hosting user.
    pub host_id: u64,
    /// Display name of the hosting user.
    pub host_name: String,
    /// Prize text.
    pub prize: String,
    /// When the giveaway concludes.
    pub end_time: DateTime<Utc>,
    /// Originally requested duration in seconds.
    pub duration_seconds: i64,
}

/// Parameters for starting a new giveaway through the lifecycle service.
#[derive(Debug, Clone)]
pub struct StartGiveawayParams {
    /// Guild the command was invoked in.
    pub guild_id: u64,
    /// Channel the announcement should be posted to.
    pub channel_id: u64,
    /// Discord ID of the hosting user.
    pub host_id: u64,
    /// Display name of the hosting user.
    pub host_name: String,
    /// Prize text, 2-100 characters.
    pub prize: String,
    /// Requested duration in seconds, 60 to 604800.
    pub duration_seconds: i64,
}
