//! The per-giveaway countdown task.
//!
//! Each active giveaway gets one background task that sleeps between ticks,
//! refreshes the announcement embed while time remains, and finalizes the
//! giveaway once the persisted end time has passed. Remaining time is always
//! re-derived from the stored `end_time`, never from a local counter, which is
//! what makes `extend` safe against an in-flight tick.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::all::{ChannelId, MessageId};

use crate::data::giveaway::GiveawayRepository;
use crate::error::AppError;
use crate::messenger::Messenger;
use crate::service::giveaway::builder;
use crate::service::giveaway::finalize::finalize_giveaway;
use crate::service::giveaway::registry::CountdownRegistry;
use crate::util::parse::parse_u64_from_string;

/// Fastest allowed tick, protects against hammering the message edit API.
const MIN_TICK_SECS: i64 = 5;
/// Slowest allowed tick, keeps the embed feeling live on long giveaways.
const MAX_TICK_SECS: i64 = 30;

/// Computes the sleep between countdown ticks: roughly ten updates over the
/// giveaway's life, clamped to [5s, 30s].
pub(crate) fn tick_interval(duration_seconds: i64) -> Duration {
    Duration::from_secs((duration_seconds / 10).clamp(MIN_TICK_SECS, MAX_TICK_SECS) as u64)
}

/// What a single tick decided about the giveaway.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum TickOutcome {
    /// Time remains; the loop sleeps again.
    Continue,
    /// The giveaway matured and was finalized; the loop exits.
    Finished,
    /// The record is gone or was completed elsewhere; the loop exits.
    Abandoned,
}

/// Spawns the countdown task for a giveaway, unless one is already live.
///
/// The registry slot is claimed synchronously so a racing caller (restoration
/// versus a fresh start) can never attach two loops to the same record. The
/// tick interval is derived from the seconds remaining at spawn time, so a
/// restored giveaway updates at the cadence its remaining life calls for.
pub(crate) fn spawn_countdown(
    db: DatabaseConnection,
    messenger: Arc<dyn Messenger>,
    registry: CountdownRegistry,
    giveaway_id: i32,
    remaining_seconds: i64,
) {
    if !registry.register(giveaway_id) {
        tracing::debug!(
            "countdown for giveaway record {} already live, not spawning another",
            giveaway_id
        );
        return;
    }

    tokio::spawn(async move {
        let interval = tick_interval(remaining_seconds);

        loop {
            tokio::time::sleep(interval).await;

            match run_tick(&db, messenger.as_ref(), giveaway_id).await {
                Ok(TickOutcome::Continue) => {}
                Ok(TickOutcome::Finished) | Ok(TickOutcome::Abandoned) => break,
                Err(e) => {
                    // A failed tick must not kill the timer; try again next tick.
                    tracing::error!(
                        "countdown tick for giveaway record {} failed: {}",
                        giveaway_id,
                        e
                    );
                }
            }
        }

        registry.release(giveaway_id);
    });
}

/// Runs one countdown tick against the persisted record.
///
/// Display refresh failures are logged and swallowed; only store and
/// finalize failures propagate to the loop (which also keeps ticking).
pub(crate) async fn run_tick(
    db: &DatabaseConnection,
    messenger: &dyn Messenger,
    giveaway_id: i32,
) -> Result<TickOutcome, AppError> {
    let Some(record) = GiveawayRepository::new(db).get_by_id(giveaway_id).await? else {
        return Ok(TickOutcome::Abandoned);
    };
    if record.completed {
        return Ok(TickOutcome::Abandoned);
    }

    let remaining_seconds = record
        .end_time
        .signed_duration_since(Utc::now())
        .num_seconds();

    if remaining_seconds <= 0 {
        finalize_giveaway(db, messenger, giveaway_id).await?;
        return Ok(TickOutcome::Finished);
    }

    let channel_id = ChannelId::new(parse_u64_from_string(record.channel_id.clone())?);
    let message_id = MessageId::new(parse_u64_from_string(record.message_id.clone())?);

    let entrant_count = match messenger.entrant_count(channel_id, message_id).await {
        Ok(count) => count,
        Err(e) => {
            tracing::warn!(
                "could not refresh participant count for giveaway {}: {}",
                record.case_id,
                e
            );
            0
        }
    };

    let embed = builder::countdown_embed(
        &record.prize,
        remaining_seconds,
        &record.host_name,
        entrant_count,
    );

    if let Err(e) = messenger
        .edit_announcement(channel_id, message_id, embed)
        .await
    {
        tracing::warn!(
            "could not refresh countdown display for giveaway {}: {}",
            record.case_id,
            e
        );
    }

    Ok(TickOutcome::Continue)
}
