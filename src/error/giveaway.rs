use thiserror::Error;

/// Expected giveaway lifecycle outcomes surfaced to the invoking operator.
///
/// Every variant maps to a rejection the command adapter renders as an
/// ephemeral message. None of these indicate an infrastructure failure.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GiveawayError {
    /// Requested duration is outside the allowed 1 minute to 7 day window,
    /// or an extension was not a positive number of seconds.
    #[error("Giveaway duration must be between 1 minute and 7 days")]
    InvalidDuration { seconds: i64 },

    /// Prize text length is outside the 2-100 character window.
    #[error("Prize must be between 2 and 100 characters")]
    InvalidPrize { length: usize },

    /// No giveaway matches the given case id.
    #[error("No giveaway found for case `{0}`")]
    NotFound(String),

    /// Extend was attempted on a giveaway that has already been finalized.
    #[error("Giveaway `{0}` has already ended; use reroll to pick a new winner")]
    AlreadyCompleted(String),

    /// The announcement message for this giveaway can no longer be fetched.
    #[error("The announcement message for giveaway `{0}` no longer exists")]
    MessageGone(String),

    /// Reroll found nobody to draw from.
    #[error("This giveaway has no participants to select a winner from")]
    NoParticipants,

    /// The configured giveaway channel could not be posted to.
    #[error("The giveaway channel could not be reached")]
    ChannelUnavailable,
}
