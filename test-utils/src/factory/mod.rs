//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Every record type has a `Factory` struct for
//! customization and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let post = factory::create_post(&db).await?;
//!     let category = factory::category::CategoryFactory::new(&db)
//!         .name("Events")
//!         .index(2)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user` - Session records
//! - `post` - Posts
//! - `category` - Categories
//! - `sponsor` - Sponsors
//! - `helpers` - Unique id generation shared by all factories

pub mod category;
pub mod helpers;
pub mod post;
pub mod sponsor;
pub mod user;

pub use category::create_category;
pub use post::create_post;
pub use sponsor::create_sponsor;
pub use user::create_user;
