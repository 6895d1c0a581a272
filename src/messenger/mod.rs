//! The chat-platform boundary the giveaway lifecycle engine talks through.
//!
//! The engine never calls Discord directly; it posts, edits and inspects its
//! announcement messages through the [`Messenger`] trait. Production wires in
//! [`discord::DiscordMessenger`]; service tests substitute a recording mock.

pub mod discord;

use serenity::all::{ChannelId, CreateEmbed, MessageId, ReactionType};
use serenity::async_trait;

use crate::error::AppError;

/// Emoji users react with to enter a giveaway.
pub const ENTRY_EMOJI: &str = "\u{1F389}";

/// The entry emoji as a serenity reaction type.
pub fn entry_reaction() -> ReactionType {
    ReactionType::Unicode(ENTRY_EMOJI.to_string())
}

/// A user who reacted with the entry emoji.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entrant {
    /// Discord ID of the reacting user, as a string.
    pub user_id: String,
    /// Whether the account is a bot (bots never count as participants).
    pub bot: bool,
}

/// Messaging operations the lifecycle engine needs from the chat platform.
///
/// Every method is a network call in production and may fail transiently;
/// callers decide per call site whether a failure is fatal, swallowed or
/// retried on the next tick.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Posts a new announcement message and returns its id.
    async fn post_announcement(
        &self,
        channel_id: ChannelId,
        embed: CreateEmbed,
    ) -> Result<MessageId, AppError>;

    /// Attaches the entry reaction to an announcement message.
    async fn add_entry_reaction(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<(), AppError>;

    /// Replaces the embed of an existing announcement message.
    async fn edit_announcement(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        embed: CreateEmbed,
    ) -> Result<(), AppError>;

    /// Whether the announcement message can still be fetched. A deleted
    /// message, missing channel or revoked permission all read as `false`.
    async fn message_exists(&self, channel_id: ChannelId, message_id: MessageId) -> bool;

    /// Current number of entry reactions, excluding the bot's own seed
    /// reaction.
    async fn entrant_count(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<usize, AppError>;

    /// The users currently holding an entry reaction, bot flag included.
    async fn entrants(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<Vec<Entrant>, AppError>;
}
