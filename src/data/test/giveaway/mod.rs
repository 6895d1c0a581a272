use crate::data::giveaway::GiveawayRepository;
use crate::model::giveaway::CreateGiveawayParams;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod entries;
mod get_by_case_id;
mod list_incomplete;
mod mark_completed;
mod set_end_time;

/// Builds create parameters for a ten-minute giveaway around the given
/// message id, with the remaining snowflakes derived from it.
fn create_params(message_id: u64) -> CreateGiveawayParams {
    CreateGiveawayParams {
        message_id,
        case_id: format!("GIVE-CASE{}", message_id),
        channel_id: message_id + 1,
        guild_id: message_id + 2,
        host_id: message_id + 3,
        host_name: "tester".to_string(),
        prize: "Test prize".to_string(),
        end_time: Utc::now() + Duration::minutes(10),
        duration_seconds: 600,
    }
}
