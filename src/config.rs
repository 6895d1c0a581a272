use crate::error::{config::ConfigError, AppError};

pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,

    /// Channel all giveaway announcements are posted to.
    pub giveaway_channel_id: String,
    /// Role required to manage giveaways.
    pub administrator_role_id: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            giveaway_channel_id: std::env::var("GIVEAWAY_CHANNEL_ID")
                .map_err(|_| ConfigError::MissingEnvVar("GIVEAWAY_CHANNEL_ID".to_string()))?,
            administrator_role_id: std::env::var("ADMINISTRATOR_ROLE_ID")
                .map_err(|_| ConfigError::MissingEnvVar("ADMINISTRATOR_ROLE_ID".to_string()))?,
        })
    }
}
