//! Publication request factory for creating test publication request entities.
//!
//! This module provides factory methods for creating publication request entities
//! with sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::publication_request::PublicationStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test publication requests with customizable fields.
///
/// Provides a builder pattern for creating publication request entities with
/// default values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use entity::publication_request::PublicationStatus;
/// use test_utils::factory::publication_request::PublicationRequestFactory;
///
/// let request = PublicationRequestFactory::new(&db, host.id)
///     .name("Terraza Centro")
///     .status(PublicationStatus::Approved)
///     .build()
///     .await?;
/// ```
pub struct PublicationRequestFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    name: String,
    description: String,
    capacity: i32,
    location: String,
    price: f64,
    contact_phone: String,
    contact_email: String,
    status: PublicationStatus,
}

impl<'a> PublicationRequestFactory<'a> {
    /// Creates a new PublicationRequestFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Terraza {id}"` where id is auto-incremented
    /// - description: a short test description
    /// - capacity: `20`
    /// - location: `"Ciudad de México"`
    /// - price: `1500.0`
    /// - contact phone/email: generated test values
    /// - status: `PublicationStatus::Pending`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `owner_id` - User ID of the host submitting the request
    ///
    /// # Returns
    /// - `PublicationRequestFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            owner_id,
            name: format!("Terraza {}", id),
            description: "Test terrace description".to_string(),
            capacity: 20,
            location: "Ciudad de México".to_string(),
            price: 1500.0,
            contact_phone: "5550000000".to_string(),
            contact_email: format!("owner{}@example.com", id),
            status: PublicationStatus::Pending,
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

    /// Sets the review status.
    pub fn status(mut self, status: PublicationStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the publication request entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::publication_request::Model)` - Created publication request entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::publication_request::Model, DbErr> {
        entity::publication_request::ActiveModel {
            id: ActiveValue::NotSet,
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
            status: ActiveValue::Set(self.status),
            admin_notes: ActiveValue::Set(None),
            reviewed_by: ActiveValue::Set(None),
            reviewed_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending publication request with default values.
///
/// Shorthand for `PublicationRequestFactory::new(db, owner_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `owner_id` - User ID of the submitting host
///
/// # Returns
/// - `Ok(entity::publication_request::Model)` - Created publication request entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_publication_request(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::publication_request::Model, DbErr> {
    PublicationRequestFactory::new(db, owner_id).build().await
}
