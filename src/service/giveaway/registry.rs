//! Process-wide registry of live countdown tasks.
//!
//! The registry only tracks which giveaways currently have a countdown task
//! attached in this process. It is rebuilt from the database by restoration on
//! every boot and is never consulted as a source of truth for giveaway state.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Tracks the set of giveaway record ids with a live countdown task.
///
/// Cloning is cheap; all clones share the same underlying set.
#[derive(Clone, Default)]
pub struct CountdownRegistry {
    inner: Arc<Mutex<HashSet<i32>>>,
}

impl CountdownRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims a countdown slot for the given giveaway.
    ///
    /// # Returns
    /// - `true` - The slot was claimed and a task may be spawned
    /// - `false` - A countdown for this giveaway is already live; the caller
    ///   must not spawn a second one
    pub fn register(&self, giveaway_id: i32) -> bool {
        self.inner
            .lock()
            .expect("countdown registry lock poisoned")
            .insert(giveaway_id)
    }

    /// Releases the countdown slot when a task exits.
    pub fn release(&self, giveaway_id: i32) {
        self.inner
            .lock()
            .expect("countdown registry lock poisoned")
            .remove(&giveaway_id);
    }

    /// Whether a countdown task is currently live for the given giveaway.
    pub fn is_live(&self, giveaway_id: i32) -> bool {
        self.inner
            .lock()
            .expect("countdown registry lock poisoned")
            .contains(&giveaway_id)
    }

    /// Number of currently live countdown tasks.
    pub fn live_count(&self) -> usize {
        self.inner
            .lock()
            .expect("countdown registry lock poisoned")
            .len()
    }
}
