use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Terrace, User};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Terrace)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Vector of CREATE TABLE statements to execute during database setup.
    ///
    /// Each statement is generated from an entity model using SeaORM's schema builder.
    /// Statements are executed in the order they were added during `build()`.
    tables: Vec<TableCreateStatement>,

    /// Vector of CREATE INDEX statements executed after all tables exist.
    ///
    /// Schema generation from entities does not cover composite indexes, so
    /// statements that the migrations would normally create are added here.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// Initializes an empty builder ready to have entity tables added via `with_table()`.
    /// Chain method calls to configure the test environment before calling `build()`.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. The table will be created when `build()` is called. Chain multiple
    /// calls to add multiple tables. Tables should be added in dependency order (tables
    /// with foreign keys should be added after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds a CREATE INDEX statement to run after table creation.
    ///
    /// # Arguments
    /// - `stmt` - Index statement, typically built with `Index::create()`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_index(mut self, stmt: IndexCreateStatement) -> Self {
        self.indexes.push(stmt);
        self
    }

    /// Adds all tables required for the approved-terrace catalog.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - User
    /// - PublicationRequest
    /// - Terrace
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_catalog_tables(self) -> Self {
        self.with_table(User)
            .with_table(PublicationRequest)
            .with_table(Terrace)
    }

    /// Adds all tables required for reservation operations.
    ///
    /// This convenience method adds the catalog tables plus the reservations
    /// table and the unique (client_id, client_ref) index that backs bulk-sync
    /// idempotency. Entity-derived schemas cannot express that composite index,
    /// so it is created here exactly as the migrations create it.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_reservation_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_reservation_tables(self) -> Self {
        self.with_catalog_tables().with_table(Reservation).with_index(
            Index::create()
                .name("idx_reservation_sync_key_unique")
                .table(Reservation)
                .col(entity::reservation::Column::ClientId)
                .col(entity::reservation::Column::ClientRef)
                .unique()
                .to_owned(),
        )
    }

    /// Adds all tables required for notification operations.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_notification_tables(self) -> Self {
        self.with_table(User).with_table(Notification)
    }

    /// Adds all tables required for document verification operations.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_verification_tables(self) -> Self {
        self.with_table(User).with_table(VerificationDocument)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`, then any CREATE INDEX statements.
    /// Tables are created in the order they were added to the builder.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}
