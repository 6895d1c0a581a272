//! Serenity-backed implementation of the [`Messenger`] boundary.

use std::sync::Arc;

use serenity::all::{ChannelId, CreateEmbed, CreateMessage, EditMessage, MessageId};
use serenity::async_trait;
use serenity::http::Http;

use crate::error::AppError;
use crate::messenger::{entry_reaction, Entrant, Messenger};

/// Reaction user fetches are capped at one page; Discord returns at most 100
/// users per request and the announcement's entry pool rarely exceeds that.
const REACTION_USER_PAGE: u8 = 100;

pub struct DiscordMessenger {
    http: Arc<Http>,
}

impl DiscordMessenger {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Messenger for DiscordMessenger {
    async fn post_announcement(
        &self,
        channel_id: ChannelId,
        embed: CreateEmbed,
    ) -> Result<MessageId, AppError> {
        let message = self
            .http
            .send_message(channel_id, vec![], &CreateMessage::new().embed(embed))
            .await?;

        Ok(message.id)
    }

    async fn add_entry_reaction(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<(), AppError> {
        self.http
            .create_reaction(channel_id, message_id, &entry_reaction())
            .await?;

        Ok(())
    }

    async fn edit_announcement(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        embed: CreateEmbed,
    ) -> Result<(), AppError> {
        self.http
            .edit_message(
                channel_id,
                message_id,
                &EditMessage::new().embed(embed),
                vec![],
            )
            .await?;

        Ok(())
    }

    async fn message_exists(&self, channel_id: ChannelId, message_id: MessageId) -> bool {
        self.http.get_message(channel_id, message_id).await.is_ok()
    }

    async fn entrant_count(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<usize, AppError> {
        let message = self.http.get_message(channel_id, message_id).await?;

        let count = message
            .reactions
            .iter()
            .find(|reaction| reaction.reaction_type == entry_reaction())
            .map(|reaction| {
                // The bot's own seed reaction does not count as a participant.
                if reaction.me {
                    reaction.count.saturating_sub(1)
                } else {
                    reaction.count
                }
            })
            .unwrap_or(0);

        Ok(count as usize)
    }

    async fn entrants(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<Vec<Entrant>, AppError> {
        let users = self
            .http
            .get_reaction_users(
                channel_id,
                message_id,
                &entry_reaction(),
                REACTION_USER_PAGE,
                None,
            )
            .await?;

        Ok(users
            .into_iter()
            .map(|user| Entrant {
                user_id: user.id.get().to_string(),
                bot: user.bot,
            })
            .collect())
    }
}
