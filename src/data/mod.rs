//! Database repository layer.
//!
//! This module contains repository structs that handle database operations for
//! each domain in the application. Repositories use SeaORM entity models
//! internally; callers receive entity models and convert them to domain models
//! at the service boundary. The giveaway repository is the durable store the
//! lifecycle engine treats as its single source of truth.

pub mod giveaway;

#[cfg(test)]
mod test;
