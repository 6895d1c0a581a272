//! Boot-time reconciliation of persisted giveaways.
//!
//! A restarted process has no countdown tasks; this scan rebuilds them from
//! the store. Giveaways that matured while the process was offline are
//! finalized on the spot, before any other work touches them.

use std::sync::Arc;

use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::all::{ChannelId, MessageId};

use crate::data::giveaway::GiveawayRepository;
use crate::error::AppError;
use crate::messenger::Messenger;
use crate::service::giveaway::countdown::spawn_countdown;
use crate::service::giveaway::finalize::finalize_giveaway;
use crate::service::giveaway::registry::CountdownRegistry;
use crate::util::parse::parse_u64_from_string;

/// What happened to each scanned giveaway during restoration.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RestoreSummary {
    /// Overdue giveaways finalized immediately.
    pub finalized: usize,
    /// Still-running giveaways whose countdown task was re-attached.
    pub resumed: usize,
    /// Giveaways whose announcement message is gone; left unfinished.
    pub skipped: usize,
    /// Giveaways whose restoration failed; left for the next boot.
    pub failed: usize,
}

enum RestoredAs {
    Finalized,
    Resumed,
    Skipped,
}

/// Scans all unfinished giveaways and reconciles each with the wall clock.
///
/// Individual records failing never abort the scan; each failure is logged
/// and counted, and the remaining records are still processed.
///
/// # Arguments
/// - `db` - Database connection
/// - `messenger` - Chat-platform boundary used to probe messages and edit
///   terminal displays
/// - `registry` - Live-countdown registry the resumed tasks attach to
///
/// # Returns
/// - `Ok(RestoreSummary)` - Per-outcome counts for the scan
/// - `Err(AppError::DbErr)` - The initial store enumeration itself failed
pub async fn restore_giveaways(
    db: &DatabaseConnection,
    messenger: Arc<dyn Messenger>,
    registry: CountdownRegistry,
) -> Result<RestoreSummary, AppError> {
    let records = GiveawayRepository::new(db).list_incomplete().await?;

    let mut summary = RestoreSummary::default();

    for record in records {
        match restore_one(db, &messenger, &registry, &record).await {
            Ok(RestoredAs::Finalized) => summary.finalized += 1,
            Ok(RestoredAs::Resumed) => summary.resumed += 1,
            Ok(RestoredAs::Skipped) => summary.skipped += 1,
            Err(e) => {
                tracing::error!("could not restore giveaway {}: {}", record.case_id, e);
                summary.failed += 1;
            }
        }
    }

    if summary.finalized + summary.resumed > 0 {
        tracing::info!(
            "restored {} giveaway(s): {} finalized, {} resumed",
            summary.finalized + summary.resumed,
            summary.finalized,
            summary.resumed
        );
    }

    Ok(summary)
}

async fn restore_one(
    db: &DatabaseConnection,
    messenger: &Arc<dyn Messenger>,
    registry: &CountdownRegistry,
    record: &entity::giveaway::Model,
) -> Result<RestoredAs, AppError> {
    let channel_id = ChannelId::new(parse_u64_from_string(record.channel_id.clone())?);
    let message_id = MessageId::new(parse_u64_from_string(record.message_id.clone())?);

    if !messenger.message_exists(channel_id, message_id).await {
        tracing::warn!(
            "announcement message for giveaway {} is gone; leaving it unfinished",
            record.case_id
        );
        return Ok(RestoredAs::Skipped);
    }

    let remaining_seconds = record
        .end_time
        .signed_duration_since(Utc::now())
        .num_seconds();

    if remaining_seconds <= 0 {
        finalize_giveaway(db, messenger.as_ref(), record.id).await?;
        return Ok(RestoredAs::Finalized);
    }

    spawn_countdown(
        db.clone(),
        messenger.clone(),
        registry.clone(),
        record.id,
        remaining_seconds,
    );
    tracing::info!(
        "resumed countdown for giveaway {} ({}s left)",
        record.case_id,
        remaining_seconds
    );

    Ok(RestoredAs::Resumed)
}
