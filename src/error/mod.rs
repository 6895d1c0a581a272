//! Error types for the giveaway bot.
//!
//! This module provides the application's error hierarchy. The `AppError` enum
//! serves as the top-level error type that wraps domain-specific errors. Expected
//! operator-facing outcomes live in [`giveaway::GiveawayError`]; everything else
//! is an infrastructure failure.

pub mod config;
pub mod giveaway;
pub mod internal;

use thiserror::Error;

use crate::error::{config::ConfigError, giveaway::GiveawayError, internal::InternalError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most
/// variants use `#[from]` for automatic conversion. `GiveawayErr` carries the
/// expected, user-facing outcomes that the command adapter renders directly;
/// the remaining variants are unexpected I/O or configuration failures.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Expected giveaway lifecycle outcome (invalid input, unknown case,
    /// already ended, ...). Rendered to the invoking operator without retry.
    #[error(transparent)]
    GiveawayErr(#[from] GiveawayError),

    /// Internal issue indicating unexpected state, such as a stored snowflake
    /// that no longer parses.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity. Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
