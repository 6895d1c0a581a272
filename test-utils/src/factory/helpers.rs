//! Shared helper utilities for factory methods.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Returns a process-unique counter value for generating distinct test data
/// (names, snowflakes, case ids) across factories.
pub fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Builds a unique, numerically valid Discord snowflake string for tests.
pub fn next_snowflake() -> String {
    (900_000_000_000_000_000u64 + next_id()).to_string()
}
