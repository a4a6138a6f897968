//! Terrace factory for creating test terrace catalog entities.
//!
//! This module provides factory methods for creating approved terrace catalog
//! entities with sensible defaults, reducing boilerplate in tests. The factory
//! supports customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test terraces with customizable fields.
///
/// Provides a builder pattern for creating terrace catalog entities with
/// default values that can be overridden as needed for specific test scenarios.
/// The terrace references an existing publication request and owner; use
/// `factory::helpers::create_published_terrace` when you also need those
/// dependencies created.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::terrace::TerraceFactory;
///
/// let terrace = TerraceFactory::new(&db, request.id, host.id)
///     .name("Terraza Roma")
///     .capacity(40)
///     .build()
///     .await?;
/// ```
pub struct TerraceFactory<'a> {
    db: &'a DatabaseConnection,
    request_id: i32,
    owner_id: i32,
    name: String,
    description: String,
    capacity: i32,
    location: String,
    price: f64,
    contact_phone: String,
    contact_email: String,
}

impl<'a> TerraceFactory<'a> {
    /// Creates a new TerraceFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Terraza {id}"` where id is auto-incremented
    /// - description: a short test description
    /// - capacity: `20`
    /// - location: `"Ciudad de México"`
    /// - price: `1500.0`
    /// - contact phone/email: generated test values
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `request_id` - Publication request this catalog row was approved from
    /// - `owner_id` - User ID of the owning host
    ///
    /// # Returns
    /// - `TerraceFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, request_id: i32, owner_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            request_id,
            owner_id,
            name: format!("Terraza {}", id),
            description: "Test terrace description".to_string(),
            capacity: 20,
            location: "Ciudad de México".to_string(),
            price: 1500.0,
            contact_phone: "5550000000".to_string(),
            contact_email: format!("owner{}@example.com", id),
        }
    }

    /// Sets the listing name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the guest capacity.
    pub fn capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the rental price.
    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Builds and inserts the terrace entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::terrace::Model)` - Created terrace entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::terrace::Model, DbErr> {
        entity::terrace::ActiveModel {
            id: ActiveValue::NotSet,
            request_id: ActiveValue::Set(self.request_id),
            owner_id: ActiveValue::Set(self.owner_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            capacity: ActiveValue::Set(self.capacity),
            location: ActiveValue::Set(self.location),
            price: ActiveValue::Set(self.price),
            contact_phone: ActiveValue::Set(self.contact_phone),
            contact_email: ActiveValue::Set(self.contact_email),
            amenities: ActiveValue::Set(serde_json::json!([])),
            rules: ActiveValue::Set(None),
            published_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a terrace with default values for the specified request and owner.
///
/// Shorthand for `TerraceFactory::new(db, request_id, owner_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `request_id` - Publication request ID the catalog row references
/// - `owner_id` - User ID of the owning host
///
/// # Returns
/// - `Ok(entity::terrace::Model)` - Created terrace entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_terrace(
    db: &DatabaseConnection,
    request_id: i32,
    owner_id: i32,
) -> Result<entity::terrace::Model, DbErr> {
    TerraceFactory::new(db, request_id, owner_id).build().await
}
