mod bot;
mod config;
mod data;
mod error;
mod messenger;
mod model;
mod service;
mod startup;
mod util;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::AppError;
use crate::service::giveaway::registry::CountdownRegistry;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Arc::new(Config::from_env()?);

    let db = startup::connect_to_database(&config).await?;

    // Rebuilt by restoration once the gateway is up; never a source of truth.
    let registry = CountdownRegistry::new();

    tracing::info!("Starting giveaway bot");

    bot::start::start_bot(config, db, registry).await
}
