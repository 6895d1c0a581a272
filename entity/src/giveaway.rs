use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// A running or concluded giveaway. Discord snowflakes are stored as strings.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "giveaway")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Snowflake of the announcement message this giveaway lives on.
    #[sea_orm(unique)]
    pub message_id: String,
    /// Short operator-facing identifier, e.g. `GIVE-aB3xYz9Qw1`.
    #[sea_orm(unique)]
    pub case_id: String,
    pub channel_id: String,
    pub guild_id: String,
    pub host_id: String,
    pub host_name: String,
    pub prize: String,
    /// When the giveaway concludes. Only ever moves forward (extend).
    pub end_time: DateTime<Utc>,
    /// Originally requested duration, kept for display. Never mutated.
    pub duration_seconds: i64,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::giveaway_entry::Entity")]
    GiveawayEntry,
}

impl Related<super::giveaway_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GiveawayEntry.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
