//! Giveaway Bot Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the
//! giveaway bot. This crate offers a builder pattern for creating test contexts with
//! in-memory SQLite databases and customizable table schemas, plus factories for
//! seeding giveaway records and entries.
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_giveaway_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_giveaway_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
