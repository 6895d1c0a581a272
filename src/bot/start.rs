use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{
    ActivityData, Client, Command, Context, EventHandler, GatewayIntents, Interaction, Reaction,
    Ready,
};
use serenity::async_trait;

use crate::bot::command;
use crate::config::Config;
use crate::data::giveaway::GiveawayRepository;
use crate::error::AppError;
use crate::messenger::discord::DiscordMessenger;
use crate::messenger::{entry_reaction, Messenger};
use crate::service::giveaway::registry::CountdownRegistry;
use crate::service::giveaway::restore::restore_giveaways;

/// Discord bot event handler
struct Handler {
    db: DatabaseConnection,
    config: Arc<Config>,
    registry: CountdownRegistry,
    /// Restoration must run once per process, not once per gateway reconnect.
    restored: AtomicBool,
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        tracing::info!("{} is connected to Discord!", ready.user.name);

        ctx.set_activity(Some(ActivityData::watching("giveaways")));

        if let Err(e) =
            Command::set_global_commands(&ctx.http, vec![command::giveaway::register()]).await
        {
            tracing::error!("Failed to register slash commands: {}", e);
        }

        if !self.restored.swap(true, Ordering::SeqCst) {
            let db = self.db.clone();
            let registry = self.registry.clone();
            let messenger: Arc<dyn Messenger> = Arc::new(DiscordMessenger::new(ctx.http.clone()));

            tokio::spawn(async move {
                if let Err(e) = restore_giveaways(&db, messenger, registry).await {
                    tracing::error!("Giveaway restoration failed: {}", e);
                }
            });
        }
    }

    /// Called when a slash command or other interaction is invoked
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command_interaction) = interaction else {
            return;
        };

        if command_interaction.data.name != "giveaway" {
            return;
        }

        if let Err(e) = command::giveaway::run(
            &ctx,
            &command_interaction,
            &self.db,
            &self.config,
            &self.registry,
        )
        .await
        {
            tracing::error!("Giveaway command failed: {}", e);
        }
    }

    /// Called when a reaction is added to any message the bot can see.
    ///
    /// Captures entry reactions on active giveaway announcements into the
    /// persisted entry set, which finalize and reroll prefer over a live
    /// reactor re-query.
    async fn reaction_add(&self, _ctx: Context, reaction: Reaction) {
        if reaction.emoji != entry_reaction() {
            return;
        }

        let Some(user_id) = reaction.user_id else {
            return;
        };

        // Guild reactions carry the member; bots (including this one seeding
        // the reaction) never count as participants.
        let Some(member) = reaction.member.as_ref() else {
            return;
        };
        if member.user.bot {
            return;
        }

        let repo = GiveawayRepository::new(&self.db);

        match repo.get_by_message_id(reaction.message_id.get()).await {
            Ok(Some(record)) if !record.completed => {
                match repo.add_entry(record.id, user_id.get()).await {
                    Ok(true) => {
                        tracing::debug!("user {} entered giveaway {}", user_id, record.case_id);
                    }
                    Ok(false) => {}
                    Err(e) => tracing::error!("Failed to record giveaway entry: {}", e),
                }
            }
            Ok(_) => {}
            Err(e) => tracing::error!("Failed to look up giveaway for reaction: {}", e),
        }
    }

    /// Called when a reaction is removed from any message the bot can see.
    async fn reaction_remove(&self, _ctx: Context, reaction: Reaction) {
        if reaction.emoji != entry_reaction() {
            return;
        }

        let Some(user_id) = reaction.user_id else {
            return;
        };

        let repo = GiveawayRepository::new(&self.db);

        match repo.get_by_message_id(reaction.message_id.get()).await {
            Ok(Some(record)) if !record.completed => {
                if let Err(e) = repo.remove_entry(record.id, user_id.get()).await {
                    tracing::error!("Failed to remove giveaway entry: {}", e);
                }
            }
            Ok(_) => {}
            Err(e) => tracing::error!("Failed to look up giveaway for reaction: {}", e),
        }
    }
}

/// Starts the Discord bot in a blocking manner
///
/// This function creates and starts the Discord bot client. It blocks until
/// the bot shuts down. Giveaway restoration is kicked off from the `ready`
/// event, once the gateway connection (and thus the HTTP client) is live.
///
/// # Arguments
/// - `config` - Application configuration
/// - `db` - Database connection for the bot to use
/// - `registry` - Live-countdown registry shared with restoration
///
/// # Returns
/// - `Ok(())` if the bot starts and runs successfully
/// - `Err(AppError)` if bot initialization or connection fails
pub async fn start_bot(
    config: Arc<Config>,
    db: DatabaseConnection,
    registry: CountdownRegistry,
) -> Result<(), AppError> {
    // Reaction events require GUILD_MESSAGE_REACTIONS; members arrive inline
    // on the reaction payload, so no privileged intent is needed.
    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::GUILD_MESSAGE_REACTIONS;

    let handler = Handler {
        db,
        config: config.clone(),
        registry,
        restored: AtomicBool::new(false),
    };

    let mut client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    tracing::info!("Starting Discord bot...");

    // Start the bot (this blocks until shutdown)
    client.start().await?;

    Ok(())
}
