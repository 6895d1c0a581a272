//! Embed building for giveaway announcements and terminal displays.

use serenity::all::{CreateEmbed, CreateEmbedFooter, Timestamp};

use crate::messenger::ENTRY_EMOJI;

/// Embed color while a giveaway is running.
const COLOR_ACTIVE: u32 = 0xf1c40f;
/// Embed color for a drawn winner.
const COLOR_WINNER: u32 = 0x2ecc71;
/// Embed color when a giveaway ends without participants.
const COLOR_NO_WINNER: u32 = 0x95a5a6;

/// Builds the initial announcement embed posted when a giveaway starts.
///
/// Shows zero participants; the countdown ticks keep the participant count
/// and time remaining up to date afterwards.
pub fn announcement_embed(prize: &str, duration_seconds: i64, host_id: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title(format!("{ENTRY_EMOJI} New Giveaway Started!"))
        .description(format!(
            "React with {ENTRY_EMOJI} below to enter!"
        ))
        .color(COLOR_ACTIVE)
        .field("Prize", format!("**{}**", prize), true)
        .field("Duration", format!("**{}**", format_duration(duration_seconds)), true)
        .field("Hosted by", format!("<@{}>", host_id), true)
        .field("Participants", "0", true)
        .footer(CreateEmbedFooter::new(
            "Good luck! The winner is drawn at random.",
        ))
        .timestamp(Timestamp::now())
}

/// Builds the periodic countdown embed with refreshed time remaining and
/// participant count.
pub fn countdown_embed(
    prize: &str,
    remaining_seconds: i64,
    host_name: &str,
    entrant_count: usize,
) -> CreateEmbed {
    CreateEmbed::new()
        .title(format!("{ENTRY_EMOJI} Giveaway in Progress!"))
        .color(COLOR_ACTIVE)
        .field("Prize", format!("**{}**", prize), true)
        .field(
            "Time Remaining",
            format!("**{}**", format_duration(remaining_seconds)),
            true,
        )
        .field("Hosted by", host_name.to_string(), true)
        .field("Participants", format!("**{}**", entrant_count), true)
        .footer(CreateEmbedFooter::new(
            "Keep reacting to participate! The winner is selected when time runs out.",
        ))
        .timestamp(Timestamp::now())
}

/// Builds the terminal embed announcing the drawn winner.
pub fn winner_embed(prize: &str, winner_user_id: &str, entrant_count: usize) -> CreateEmbed {
    CreateEmbed::new()
        .title("\u{1F3C6} Giveaway Winner Announced!")
        .description(format!(
            "Congratulations <@{}>! You have won the **{}** giveaway!",
            winner_user_id, prize
        ))
        .color(COLOR_WINNER)
        .field("Prize", format!("**{}**", prize), true)
        .field("Winner", format!("<@{}>", winner_user_id), true)
        .field("Total Participants", format!("**{}**", entrant_count), true)
        .footer(CreateEmbedFooter::new(
            "Giveaway ended - congratulations to the winner!",
        ))
        .timestamp(Timestamp::now())
}

/// Builds the terminal embed for a giveaway that ended with no participants.
pub fn no_winner_embed(prize: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title("\u{274C} No Winners")
        .description(format!(
            "Nobody entered the **{}** giveaway. Better luck next time!",
            prize
        ))
        .color(COLOR_NO_WINNER)
        .field("Prize", format!("**{}**", prize), true)
        .field("Total Participants", "0", true)
        .footer(CreateEmbedFooter::new("Giveaway ended - no participants"))
        .timestamp(Timestamp::now())
}

/// Builds the embed shown after a reroll picked a new winner.
pub fn reroll_embed(prize: &str, winner_user_id: &str, entrant_count: usize) -> CreateEmbed {
    CreateEmbed::new()
        .title("\u{1F38A} New Winner Selected!")
        .description(format!(
            "Congratulations <@{}>! You have won the **{}** giveaway!",
            winner_user_id, prize
        ))
        .color(COLOR_WINNER)
        .field("Prize", format!("**{}**", prize), true)
        .field("New Winner", format!("<@{}>", winner_user_id), true)
        .field("Total Participants", format!("**{}**", entrant_count), true)
        .field(
            "Note",
            "This is a reroll - a new winner was selected from the existing participants",
            false,
        )
        .footer(CreateEmbedFooter::new("Giveaway rerolled"))
        .timestamp(Timestamp::now())
}

/// Formats whole seconds as a readable duration, e.g. `1 day, 2 hours, 5 minutes`.
pub fn format_duration(seconds: i64) -> String {
    let seconds = seconds.max(0);

    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3_600;
    let minutes = (seconds % 3_600) / 60;
    let secs = seconds % 60;

    let mut parts = Vec::new();
    for (amount, unit) in [
        (days, "day"),
        (hours, "hour"),
        (minutes, "minute"),
        (secs, "second"),
    ] {
        if amount > 0 {
            let plural = if amount == 1 { "" } else { "s" };
            parts.push(format!("{} {}{}", amount, unit, plural));
        }
    }

    if parts.is_empty() {
        return "0 seconds".to_string();
    }

    parts.join(", ")
}
