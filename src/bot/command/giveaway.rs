//! The `/giveaway` slash command: a thin adapter over the lifecycle service.
//!
//! Parses options, checks authorization, invokes the service and renders the
//! outcome. Expected rejections (`GiveawayError`) become ephemeral embeds;
//! anything else is logged and rendered as a generic failure.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateEmbed, CreateInteractionResponse, CreateInteractionResponseMessage,
    EditInteractionResponse, ResolvedOption, ResolvedValue, RoleId, Timestamp,
};

use crate::config::Config;
use crate::error::AppError;
use crate::messenger::discord::DiscordMessenger;
use crate::messenger::Messenger;
use crate::model::giveaway::StartGiveawayParams;
use crate::service::giveaway::builder::format_duration;
use crate::service::giveaway::registry::CountdownRegistry;
use crate::service::giveaway::GiveawayService;
use crate::util::parse::{parse_duration_string, parse_u64_from_string};

const COLOR_SUCCESS: u32 = 0x2ecc71;
const COLOR_ERROR: u32 = 0xe74c3c;

/// Builds the `/giveaway` command definition registered with Discord.
pub fn register() -> CreateCommand {
    CreateCommand::new("giveaway")
        .description("Manage giveaways in your server")
        .add_option(
            CreateCommandOption::new(CommandOptionType::SubCommand, "start", "Start a new giveaway")
                .add_sub_option(
                    CreateCommandOption::new(
                        CommandOptionType::String,
                        "duration",
                        "Duration (examples: 10m, 1h, 2d) - max 7 days",
                    )
                    .required(true),
                )
                .add_sub_option(
                    CreateCommandOption::new(
                        CommandOptionType::String,
                        "prize",
                        "The prize for the giveaway",
                    )
                    .required(true)
                    .min_length(2)
                    .max_length(100),
                ),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "extend",
                "Extend a running giveaway",
            )
            .add_sub_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "case-id",
                    "The case ID of the giveaway (e.g. GIVE-aB3xYz9Qw1)",
                )
                .required(true),
            )
            .add_sub_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "duration",
                    "How much longer (e.g. 10m, 1h, 1d)",
                )
                .required(true),
            ),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "reroll",
                "Pick a new winner from an ended giveaway",
            )
            .add_sub_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "case-id",
                    "The case ID of the ended giveaway",
                )
                .required(true),
            ),
        )
}

/// Dispatches a `/giveaway` invocation to the matching subcommand handler.
pub async fn run(
    ctx: &Context,
    interaction: &CommandInteraction,
    db: &DatabaseConnection,
    config: &Config,
    registry: &CountdownRegistry,
) -> Result<(), AppError> {
    if !is_administrator(interaction, config)? {
        let embed = error_embed(
            "Access Denied",
            &format!(
                "Only users with the <@&{}> role can manage giveaways.",
                config.administrator_role_id
            ),
        );
        return reply_ephemeral(ctx, interaction, embed).await;
    }

    let options = interaction.data.options();
    let Some(ResolvedOption {
        name,
        value: ResolvedValue::SubCommand(args),
        ..
    }) = options.first()
    else {
        return Ok(());
    };

    match *name {
        "start" => run_start(ctx, interaction, args, db, config, registry).await,
        "extend" => run_extend(ctx, interaction, args, db, registry).await,
        "reroll" => run_reroll(ctx, interaction, args, db, registry).await,
        _ => Ok(()),
    }
}

async fn run_start(
    ctx: &Context,
    interaction: &CommandInteraction,
    args: &[ResolvedOption<'_>],
    db: &DatabaseConnection,
    config: &Config,
    registry: &CountdownRegistry,
) -> Result<(), AppError> {
    let Some(duration_input) = str_option(args, "duration") else {
        return Ok(());
    };
    let Some(prize) = str_option(args, "prize") else {
        return Ok(());
    };

    let Some(guild_id) = interaction.guild_id else {
        let embed = error_embed("Server Only", "Giveaways can only be started in a server.");
        return reply_ephemeral(ctx, interaction, embed).await;
    };

    let Some(duration_seconds) = parse_duration_string(duration_input) else {
        let embed = error_embed(
            "Invalid Duration",
            "Duration format is wrong.\n\n**Valid:**\n- Minutes: `10m`, `30m`\n- Hours: `1h`, `2h`\n- Days: `1d`, `2d`",
        );
        return reply_ephemeral(ctx, interaction, embed).await;
    };

    let channel_id = parse_u64_from_string(config.giveaway_channel_id.clone())?;

    // Posting and persisting can outlast the 3 second interaction window.
    interaction.defer(&ctx.http).await?;

    let messenger: Arc<dyn Messenger> = Arc::new(DiscordMessenger::new(ctx.http.clone()));
    let service = GiveawayService::new(db, messenger, registry.clone());

    let result = service
        .start(StartGiveawayParams {
            guild_id: guild_id.get(),
            channel_id,
            host_id: interaction.user.id.get(),
            host_name: interaction.user.name.clone(),
            prize: prize.to_string(),
            duration_seconds,
        })
        .await;

    let embed = match result {
        Ok(giveaway) => success_embed(
            "Giveaway Started!",
            &format!(
                "Your giveaway has been posted to <#{}>. The countdown has begun!",
                giveaway.channel_id
            ),
        )
        .field("Prize", format!("**{}**", giveaway.prize), true)
        .field(
            "Duration",
            format!("**{}**", format_duration(giveaway.duration_seconds)),
            true,
        )
        .field("Case ID", format!("`{}`", giveaway.case_id), true),
        Err(AppError::GiveawayErr(e)) => error_embed("Could Not Start Giveaway", &e.to_string()),
        Err(e) => {
            tracing::error!("Giveaway start failed: {}", e);
            generic_failure_embed()
        }
    };

    edit_reply(ctx, interaction, embed).await
}

async fn run_extend(
    ctx: &Context,
    interaction: &CommandInteraction,
    args: &[ResolvedOption<'_>],
    db: &DatabaseConnection,
    registry: &CountdownRegistry,
) -> Result<(), AppError> {
    let Some(case_id) = str_option(args, "case-id") else {
        return Ok(());
    };
    let Some(duration_input) = str_option(args, "duration") else {
        return Ok(());
    };

    let Some(add_seconds) = parse_duration_string(duration_input) else {
        let embed = error_embed(
            "Invalid Duration",
            "Duration format is wrong. Use `10m`, `1h`, `1d` and similar.",
        );
        return reply_ephemeral(ctx, interaction, embed).await;
    };

    let messenger: Arc<dyn Messenger> = Arc::new(DiscordMessenger::new(ctx.http.clone()));
    let service = GiveawayService::new(db, messenger, registry.clone());

    match service.extend(case_id, add_seconds).await {
        Ok(new_end_time) => {
            let embed = success_embed(
                "Giveaway Extended!",
                &format!(
                    "Giveaway `{}` was extended by **{}**.",
                    case_id,
                    format_duration(add_seconds)
                ),
            )
            .field(
                "New End Time",
                format!("<t:{}:F>", new_end_time.timestamp()),
                true,
            );
            reply(ctx, interaction, embed).await
        }
        Err(AppError::GiveawayErr(e)) => {
            reply_ephemeral(ctx, interaction, error_embed("Could Not Extend", &e.to_string()))
                .await
        }
        Err(e) => {
            tracing::error!("Giveaway extend failed: {}", e);
            reply_ephemeral(ctx, interaction, generic_failure_embed()).await
        }
    }
}

async fn run_reroll(
    ctx: &Context,
    interaction: &CommandInteraction,
    args: &[ResolvedOption<'_>],
    db: &DatabaseConnection,
    registry: &CountdownRegistry,
) -> Result<(), AppError> {
    let Some(case_id) = str_option(args, "case-id") else {
        return Ok(());
    };

    let messenger: Arc<dyn Messenger> = Arc::new(DiscordMessenger::new(ctx.http.clone()));
    let service = GiveawayService::new(db, messenger, registry.clone());

    match service.reroll(case_id).await {
        Ok(winner_user_id) => {
            let embed = success_embed(
                "Winner Rerolled",
                &format!(
                    "A new winner was selected for `{}`: <@{}>. The announcement has been updated.",
                    case_id, winner_user_id
                ),
            );
            reply(ctx, interaction, embed).await
        }
        Err(AppError::GiveawayErr(e)) => {
            reply_ephemeral(ctx, interaction, error_embed("Could Not Reroll", &e.to_string()))
                .await
        }
        Err(e) => {
            tracing::error!("Giveaway reroll failed: {}", e);
            reply_ephemeral(ctx, interaction, generic_failure_embed()).await
        }
    }
}

/// Whether the invoking member holds the configured administrator role.
fn is_administrator(interaction: &CommandInteraction, config: &Config) -> Result<bool, AppError> {
    let role_id = RoleId::new(parse_u64_from_string(config.administrator_role_id.clone())?);

    Ok(interaction
        .member
        .as_ref()
        .is_some_and(|member| member.roles.contains(&role_id)))
}

/// Finds a string option by name among a subcommand's resolved arguments.
fn str_option<'a>(args: &'a [ResolvedOption<'a>], name: &str) -> Option<&'a str> {
    args.iter().find_map(|option| match &option.value {
        ResolvedValue::String(value) if option.name == name => Some(*value),
        _ => None,
    })
}

fn success_embed(title: &str, description: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title(format!("\u{2705} {}", title))
        .description(description.to_string())
        .color(COLOR_SUCCESS)
        .timestamp(Timestamp::now())
}

fn error_embed(title: &str, description: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title(format!("\u{274C} {}", title))
        .description(description.to_string())
        .color(COLOR_ERROR)
        .timestamp(Timestamp::now())
}

fn generic_failure_embed() -> CreateEmbed {
    error_embed(
        "Something Went Wrong",
        "An unexpected error occurred. Please try again later or contact an administrator.",
    )
}

async fn reply(
    ctx: &Context,
    interaction: &CommandInteraction,
    embed: CreateEmbed,
) -> Result<(), AppError> {
    interaction
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new().embed(embed),
            ),
        )
        .await?;

    Ok(())
}

async fn reply_ephemeral(
    ctx: &Context,
    interaction: &CommandInteraction,
    embed: CreateEmbed,
) -> Result<(), AppError> {
    interaction
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .embed(embed)
                    .ephemeral(true),
            ),
        )
        .await?;

    Ok(())
}

async fn edit_reply(
    ctx: &Context,
    interaction: &CommandInteraction,
    embed: CreateEmbed,
) -> Result<(), AppError> {
    interaction
        .edit_response(&ctx.http, EditInteractionResponse::new().embed(embed))
        .await?;

    Ok(())
}
