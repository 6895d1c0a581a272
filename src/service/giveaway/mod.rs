//! Giveaway lifecycle engine.
//!
//! Owns the full life of a giveaway: creation and announcement, the
//! background countdown, extension, winner selection, reroll, and boot-time
//! restoration. The engine talks to the store through `GiveawayRepository`
//! and to Discord through the [`Messenger`] boundary; the slash command
//! adapter is just a caller.
//!
//! The module is organized by concern:
//! - `builder` - embed building and duration formatting
//! - `countdown` - the per-giveaway background tick loop
//! - `finalize` - the idempotent terminal transition
//! - `restore` - boot-time reconciliation
//! - `registry` - process-wide tracking of live countdown tasks

pub mod builder;
pub mod countdown;
pub mod finalize;
pub mod registry;
pub mod restore;

#[cfg(test)]
mod test;

use chrono::{DateTime, Utc};
use rand::distr::Alphanumeric;
use rand::Rng;
use sea_orm::DatabaseConnection;
use serenity::all::{ChannelId, MessageId};
use std::sync::Arc;

use crate::data::giveaway::GiveawayRepository;
use crate::error::{giveaway::GiveawayError, AppError};
use crate::messenger::Messenger;
use crate::model::giveaway::{CreateGiveawayParams, Giveaway, StartGiveawayParams};
use crate::service::giveaway::registry::CountdownRegistry;
use crate::util::parse::parse_u64_from_string;

/// Shortest allowed giveaway: 1 minute.
const MIN_DURATION_SECONDS: i64 = 60;
/// Longest allowed giveaway: 7 days.
const MAX_DURATION_SECONDS: i64 = 604_800;
/// Prize text length bounds.
const MIN_PRIZE_CHARS: usize = 2;
const MAX_PRIZE_CHARS: usize = 100;
/// Random tail length of a case id; 62^10 values make collisions negligible.
const CASE_ID_RANDOM_LEN: usize = 10;

/// Service providing the public giveaway lifecycle operations.
///
/// Holds the database connection, the chat-platform boundary and the live
/// countdown registry. `start` spawns a background countdown task; `extend`
/// and `reroll` operate purely on persisted state and work whether or not a
/// countdown is currently live in this process.
pub struct GiveawayService<'a> {
    db: &'a DatabaseConnection,
    messenger: Arc<dyn Messenger>,
    registry: CountdownRegistry,
}

impl<'a> GiveawayService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        messenger: Arc<dyn Messenger>,
        registry: CountdownRegistry,
    ) -> Self {
        Self {
            db,
            messenger,
            registry,
        }
    }

    /// Starts a new giveaway: posts the announcement, persists the record and
    /// spawns the countdown task.
    ///
    /// Returns as soon as the record is persisted; the countdown runs in the
    /// background. If the announcement cannot be posted, no record is written.
    /// If persisting fails after the message was posted, the error propagates
    /// and the message remains as an orphan that never updates - restoration
    /// will not find it.
    ///
    /// # Arguments
    /// - `params` - Host, target channel, prize and duration
    ///
    /// # Returns
    /// - `Ok(Giveaway)` - The persisted record, countdown running
    /// - `Err(AppError::GiveawayErr(InvalidDuration | InvalidPrize))` - Input
    ///   rejected before any state was created
    /// - `Err(AppError::GiveawayErr(ChannelUnavailable))` - The announcement
    ///   could not be posted
    /// - `Err(AppError::DbErr)` - Persisting the record failed
    pub async fn start(&self, params: StartGiveawayParams) -> Result<Giveaway, AppError> {
        if !(MIN_DURATION_SECONDS..=MAX_DURATION_SECONDS).contains(&params.duration_seconds) {
            return Err(GiveawayError::InvalidDuration {
                seconds: params.duration_seconds,
            }
            .into());
        }

        let prize_chars = params.prize.chars().count();
        if !(MIN_PRIZE_CHARS..=MAX_PRIZE_CHARS).contains(&prize_chars) {
            return Err(GiveawayError::InvalidPrize {
                length: prize_chars,
            }
            .into());
        }

        let channel_id = ChannelId::new(params.channel_id);
        let host_id = params.host_id.to_string();
        let embed = builder::announcement_embed(&params.prize, params.duration_seconds, &host_id);

        let message_id = match self.messenger.post_announcement(channel_id, embed).await {
            Ok(message_id) => message_id,
            Err(e) => {
                tracing::warn!("could not post giveaway announcement: {}", e);
                return Err(GiveawayError::ChannelUnavailable.into());
            }
        };

        // A missing entry reaction degrades the UX but users can still react
        // with the emoji themselves; not worth failing the giveaway over.
        if let Err(e) = self
            .messenger
            .add_entry_reaction(channel_id, message_id)
            .await
        {
            tracing::warn!(
                "could not add entry reaction to giveaway message {}: {}",
                message_id,
                e
            );
        }

        let end_time = Utc::now() + chrono::Duration::seconds(params.duration_seconds);

        let record = GiveawayRepository::new(self.db)
            .create(CreateGiveawayParams {
                message_id: message_id.get(),
                case_id: generate_case_id(),
                channel_id: params.channel_id,
                guild_id: params.guild_id,
                host_id: params.host_id,
                host_name: params.host_name,
                prize: params.prize,
                end_time,
                duration_seconds: params.duration_seconds,
            })
            .await
            .map_err(|e| {
                tracing::error!(
                    "giveaway message {} was posted but its record could not be persisted: {}",
                    message_id,
                    e
                );
                e
            })?;

        countdown::spawn_countdown(
            self.db.clone(),
            self.messenger.clone(),
            self.registry.clone(),
            record.id,
            params.duration_seconds,
        );

        tracing::info!(
            "started giveaway {} in channel {} ({}s)",
            record.case_id,
            record.channel_id,
            record.duration_seconds
        );

        Ok(Giveaway::from_entity(record))
    }

    /// Pushes a running giveaway's end time further out.
    ///
    /// Works purely against the store: a tick that is in flight simply picks
    /// up the new end time on its next re-read, and an expired-but-unfinalized
    /// record is reconciled by the next tick or restoration.
    ///
    /// # Arguments
    /// - `case_id` - Operator-facing identifier of the giveaway
    /// - `add_seconds` - Seconds to add; must be positive
    ///
    /// # Returns
    /// - `Ok(DateTime<Utc>)` - The new end time
    /// - `Err(AppError::GiveawayErr(InvalidDuration))` - Non-positive extension
    /// - `Err(AppError::GiveawayErr(NotFound))` - No giveaway with this case id
    /// - `Err(AppError::GiveawayErr(AlreadyCompleted))` - The giveaway already
    ///   ended; reroll is the tool for finished giveaways
    pub async fn extend(
        &self,
        case_id: &str,
        add_seconds: i64,
    ) -> Result<DateTime<Utc>, AppError> {
        if add_seconds <= 0 {
            return Err(GiveawayError::InvalidDuration {
                seconds: add_seconds,
            }
            .into());
        }

        let repo = GiveawayRepository::new(self.db);

        let record = repo
            .get_by_case_id(case_id)
            .await?
            .ok_or_else(|| GiveawayError::NotFound(case_id.to_string()))?;

        if record.completed {
            return Err(GiveawayError::AlreadyCompleted(case_id.to_string()).into());
        }

        let new_end_time = record.end_time + chrono::Duration::seconds(add_seconds);
        repo.set_end_time(record.id, new_end_time).await?;

        tracing::info!(
            "extended giveaway {} by {}s, now ending at {}",
            record.case_id,
            add_seconds,
            new_end_time
        );

        Ok(new_end_time)
    }

    /// Draws a fresh winner for a giveaway and updates its announcement.
    ///
    /// Deliberately not idempotent: every call may pick a different winner,
    /// which is the "pick again" semantic. Works on completed giveaways (the
    /// usual case) and never flips `completed` itself.
    ///
    /// # Arguments
    /// - `case_id` - Operator-facing identifier of the giveaway
    ///
    /// # Returns
    /// - `Ok(String)` - Discord ID of the newly drawn winner
    /// - `Err(AppError::GiveawayErr(NotFound))` - No giveaway with this case id
    /// - `Err(AppError::GiveawayErr(MessageGone))` - The announcement message
    ///   no longer exists
    /// - `Err(AppError::GiveawayErr(NoParticipants))` - Nobody to draw from;
    ///   nothing was mutated
    pub async fn reroll(&self, case_id: &str) -> Result<String, AppError> {
        let repo = GiveawayRepository::new(self.db);

        let record = repo
            .get_by_case_id(case_id)
            .await?
            .ok_or_else(|| GiveawayError::NotFound(case_id.to_string()))?;

        let channel_id = ChannelId::new(parse_u64_from_string(record.channel_id.clone())?);
        let message_id = MessageId::new(parse_u64_from_string(record.message_id.clone())?);

        if !self.messenger.message_exists(channel_id, message_id).await {
            return Err(GiveawayError::MessageGone(case_id.to_string()).into());
        }

        let pool = finalize::participant_pool(
            self.db,
            self.messenger.as_ref(),
            record.id,
            channel_id,
            message_id,
        )
        .await?;

        let Some(winner) = finalize::pick_winner(&pool) else {
            return Err(GiveawayError::NoParticipants.into());
        };

        let embed = builder::reroll_embed(&record.prize, &winner, pool.len());
        if let Err(e) = self
            .messenger
            .edit_announcement(channel_id, message_id, embed)
            .await
        {
            tracing::warn!(
                "rerolled giveaway {} but could not update its message: {}",
                record.case_id,
                e
            );
        }

        tracing::info!(
            "rerolled giveaway {}, new winner {} out of {} participant(s)",
            record.case_id,
            winner,
            pool.len()
        );

        Ok(winner)
    }
}

/// Generates a fresh operator-facing case id, e.g. `GIVE-aB3xYz9Qw1`.
pub(crate) fn generate_case_id() -> String {
    let tail: String = rand::rng()
        .sample_iter(Alphanumeric)
        .take(CASE_ID_RANDOM_LEN)
        .map(char::from)
        .collect();

    format!("GIVE-{}", tail)
}
