//! Shared fixtures for the lifecycle service tests: a recording stand-in for
//! the chat platform and seeding helpers.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::all::{ChannelId, CreateEmbed, MessageId};
use serenity::async_trait;

use crate::error::AppError;
use crate::messenger::{Entrant, Messenger};

/// A message post captured by the recording messenger.
pub struct RecordedPost {
    pub channel_id: u64,
    pub message_id: u64,
    pub embed: serde_json::Value,
}

/// A message edit captured by the recording messenger.
pub struct RecordedEdit {
    pub channel_id: u64,
    pub message_id: u64,
    pub embed: serde_json::Value,
}

/// Recording implementation of the chat-platform boundary.
///
/// Posts are assigned sequential message ids; edits and reactions are
/// captured for assertions. Entrant pools and missing messages are scripted
/// per message id, and post/edit failures can be toggled to simulate a flaky
/// transport.
pub struct RecordingMessenger {
    next_message_id: AtomicU64,
    pub posts: Mutex<Vec<RecordedPost>>,
    pub edits: Mutex<Vec<RecordedEdit>>,
    pub reactions: Mutex<Vec<u64>>,
    live_entrants: Mutex<HashMap<u64, Vec<Entrant>>>,
    missing_messages: Mutex<HashSet<u64>>,
    fail_posts: AtomicBool,
    fail_edits: AtomicBool,
}

impl RecordingMessenger {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            next_message_id: AtomicU64::new(600_000_000_000_000_001),
            posts: Mutex::new(Vec::new()),
            edits: Mutex::new(Vec::new()),
            reactions: Mutex::new(Vec::new()),
            live_entrants: Mutex::new(HashMap::new()),
            missing_messages: Mutex::new(HashSet::new()),
            fail_posts: AtomicBool::new(false),
            fail_edits: AtomicBool::new(false),
        })
    }

    /// Scripts the current reactors for a message id.
    pub fn set_live_entrants(&self, message_id: u64, entrants: Vec<Entrant>) {
        self.live_entrants
            .lock()
            .unwrap()
            .insert(message_id, entrants);
    }

    /// Marks a message as deleted; `message_exists` reads false afterwards.
    pub fn mark_missing(&self, message_id: u64) {
        self.missing_messages.lock().unwrap().insert(message_id);
    }

    /// Makes every subsequent post fail with a transport error.
    pub fn fail_posts(&self) {
        self.fail_posts.store(true, Ordering::SeqCst);
    }

    /// Makes every subsequent edit fail with a transport error.
    pub fn fail_edits(&self) {
        self.fail_edits.store(true, Ordering::SeqCst);
    }

    pub fn post_count(&self) -> usize {
        self.posts.lock().unwrap().len()
    }

    pub fn edit_count(&self) -> usize {
        self.edits.lock().unwrap().len()
    }

    /// Title of the most recent edit's embed, if any.
    pub fn last_edit_title(&self) -> Option<String> {
        self.edits
            .lock()
            .unwrap()
            .last()
            .and_then(|edit| edit.embed.get("title"))
            .and_then(|title| title.as_str())
            .map(String::from)
    }

    fn transport_error() -> AppError {
        serenity::Error::Other("simulated transport failure").into()
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn post_announcement(
        &self,
        channel_id: ChannelId,
        embed: CreateEmbed,
    ) -> Result<MessageId, AppError> {
        if self.fail_posts.load(Ordering::SeqCst) {
            return Err(Self::transport_error());
        }

        let message_id = self.next_message_id.fetch_add(1, Ordering::SeqCst);
        self.posts.lock().unwrap().push(RecordedPost {
            channel_id: channel_id.get(),
            message_id,
            embed: serde_json::to_value(&embed).unwrap(),
        });

        Ok(MessageId::new(message_id))
    }

    async fn add_entry_reaction(
        &self,
        _channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<(), AppError> {
        self.reactions.lock().unwrap().push(message_id.get());
        Ok(())
    }

    async fn edit_announcement(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        embed: CreateEmbed,
    ) -> Result<(), AppError> {
        if self.fail_edits.load(Ordering::SeqCst) {
            return Err(Self::transport_error());
        }

        self.edits.lock().unwrap().push(RecordedEdit {
            channel_id: channel_id.get(),
            message_id: message_id.get(),
            embed: serde_json::to_value(&embed).unwrap(),
        });

        Ok(())
    }

    async fn message_exists(&self, _channel_id: ChannelId, message_id: MessageId) -> bool {
        !self
            .missing_messages
            .lock()
            .unwrap()
            .contains(&message_id.get())
    }

    async fn entrant_count(
        &self,
        _channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<usize, AppError> {
        Ok(self
            .live_entrants
            .lock()
            .unwrap()
            .get(&message_id.get())
            .map(|entrants| entrants.iter().filter(|entrant| !entrant.bot).count())
            .unwrap_or(0))
    }

    async fn entrants(
        &self,
        _channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<Vec<Entrant>, AppError> {
        Ok(self
            .live_entrants
            .lock()
            .unwrap()
            .get(&message_id.get())
            .cloned()
            .unwrap_or_default())
    }
}

/// Upcasts the recording messenger for APIs taking the trait object.
pub fn as_messenger(messenger: &Arc<RecordingMessenger>) -> Arc<dyn Messenger> {
    messenger.clone()
}

/// A human entrant with the given user id.
pub fn human(user_id: u64) -> Entrant {
    Entrant {
        user_id: user_id.to_string(),
        bot: false,
    }
}

/// A bot entrant with the given user id.
pub fn bot(user_id: u64) -> Entrant {
    Entrant {
        user_id: user_id.to_string(),
        bot: true,
    }
}

/// Seeds a giveaway whose message and channel snowflakes are derived from
/// `message_id`, ending `end_in` from now.
pub async fn seeded_giveaway(
    db: &DatabaseConnection,
    message_id: u64,
    end_in: chrono::Duration,
) -> entity::giveaway::Model {
    test_utils::factory::giveaway::GiveawayFactory::new(db)
        .message_id(message_id.to_string())
        .channel_id((message_id + 1).to_string())
        .end_time(Utc::now() + end_in)
        .build()
        .await
        .unwrap()
}
