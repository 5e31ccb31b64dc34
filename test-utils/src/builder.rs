use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Collects the tables a test needs and creates them in a fresh in-memory store.
///
/// Tests list only the record types they touch; `with_all_tables()` is there for
/// router tests that go through several.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Post, Category};
///
/// let test = TestBuilder::new()
///     .with_table(Post)
///     .with_table(Category)
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    /// Statements run by `build()`, in the order tables were added.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Starts with an empty schema.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Queues the table for `entity`, derived from its SeaORM definition with the
    /// SQLite backend.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds every table the application uses.
    ///
    /// Convenience for router-level tests that touch several record types in one
    /// request sequence: User, Post, Category and Sponsor.
    pub fn with_all_tables(self) -> Self {
        self.with_table(User)
            .with_table(Post)
            .with_table(Category)
            .with_table(Sponsor)
    }

    /// Opens the in-memory store and creates every queued table.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context holding the ready connection
    /// - `Err(TestError::Database)` - Connection or table creation failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();
        context.with_tables(self.tables).await?;

        Ok(context)
    }
}
