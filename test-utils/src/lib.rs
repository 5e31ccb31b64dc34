//! CMS Backend Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the
//! content-management backend. This crate offers a builder pattern for creating test
//! contexts with in-memory SQLite databases and factories for every record type.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Post;
//!
//! #[tokio::test]
//! async fn test_post_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Post)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
