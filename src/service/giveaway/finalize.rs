//! Terminal state transition: draw a winner (or none) and conclude a giveaway.

use rand::seq::IndexedRandom;
use sea_orm::DatabaseConnection;
use serenity::all::{ChannelId, MessageId};

use crate::data::giveaway::GiveawayRepository;
use crate::error::AppError;
use crate::messenger::Messenger;
use crate::service::giveaway::builder;
use crate::util::parse::parse_u64_from_string;

/// Finalizes a giveaway: draws a winner from the participant pool, edits the
/// announcement message to its terminal display, and marks the record
/// completed.
///
/// Idempotent: a giveaway that is already completed (or no longer exists) is
/// left untouched, so a live countdown loop and a concurrent restoration pass
/// can both invoke this without double-announcing a winner. The `completed`
/// flag is persisted immediately before the terminal edit; a failed edit is
/// logged but never causes a second draw.
///
/// # Arguments
/// - `db` - Database connection
/// - `messenger` - Chat-platform boundary for the terminal edit
/// - `giveaway_id` - Surrogate key of the giveaway to finalize
///
/// # Returns
/// - `Ok(Some(user_id))` - The giveaway was concluded with this winner
/// - `Ok(None)` - Nothing to do (already completed, record gone) or the
///   giveaway ended without participants
/// - `Err(AppError)` - Store or participant-pool query failed before the
///   terminal transition; the giveaway stays unfinalized and may be retried
pub async fn finalize_giveaway(
    db: &DatabaseConnection,
    messenger: &dyn Messenger,
    giveaway_id: i32,
) -> Result<Option<String>, AppError> {
    let repo = GiveawayRepository::new(db);

    let Some(record) = repo.get_by_id(giveaway_id).await? else {
        return Ok(None);
    };
    if record.completed {
        return Ok(None);
    }

    let channel_id = ChannelId::new(parse_u64_from_string(record.channel_id.clone())?);
    let message_id = MessageId::new(parse_u64_from_string(record.message_id.clone())?);

    let pool = participant_pool(db, messenger, record.id, channel_id, message_id).await?;
    let winner = pick_winner(&pool);

    // Re-read immediately before the terminal write to narrow the window in
    // which a concurrent finalize could draw a second winner.
    match repo.get_by_id(giveaway_id).await? {
        Some(latest) if !latest.completed => {}
        _ => return Ok(None),
    }

    repo.mark_completed(giveaway_id).await?;

    let embed = match &winner {
        Some(user_id) => builder::winner_embed(&record.prize, user_id, pool.len()),
        None => builder::no_winner_embed(&record.prize),
    };

    if let Err(e) = messenger
        .edit_announcement(channel_id, message_id, embed)
        .await
    {
        tracing::warn!(
            "giveaway {} concluded but the terminal edit failed: {}",
            record.case_id,
            e
        );
    }

    match &winner {
        Some(user_id) => tracing::info!(
            "giveaway {} ended, winner {} out of {} participant(s)",
            record.case_id,
            user_id,
            pool.len()
        ),
        None => tracing::info!("giveaway {} ended with no participants", record.case_id),
    }

    Ok(winner)
}

/// Collects the participant pool for a draw.
///
/// Entries captured live from reaction events are authoritative when present:
/// users may remove their reaction after an earlier draw, and the captured set
/// keeps them eligible. Only when no entries were captured does this fall back
/// to querying the current reactors, excluding bot accounts.
pub(crate) async fn participant_pool(
    db: &DatabaseConnection,
    messenger: &dyn Messenger,
    giveaway_id: i32,
    channel_id: ChannelId,
    message_id: MessageId,
) -> Result<Vec<String>, AppError> {
    let entries = GiveawayRepository::new(db).entries(giveaway_id).await?;
    if !entries.is_empty() {
        return Ok(entries);
    }

    let entrants = messenger.entrants(channel_id, message_id).await?;

    Ok(entrants
        .into_iter()
        .filter(|entrant| !entrant.bot)
        .map(|entrant| entrant.user_id)
        .collect())
}

/// Draws one winner uniformly at random from the pool.
pub(crate) fn pick_winner(pool: &[String]) -> Option<String> {
    pool.choose(&mut rand::rng()).cloned()
}
