//! Reservation factory for creating test reservation entities.
//!
//! This module provides factory methods for creating reservation entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use chrono::{NaiveDate, Utc};
use entity::reservation::ReservationStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reservations with customizable fields.
///
/// Provides a builder pattern for creating reservation entities with default
/// values that can be overridden as needed for specific test scenarios. By
/// default the reservation references no catalog terrace (as an offline record
/// with an unknown venue would); call `terrace()` to link one.
///
/// # Example
///
/// ```rust,ignore
/// use entity::reservation::ReservationStatus;
/// use test_utils::factory::reservation::ReservationFactory;
///
/// let reservation = ReservationFactory::new(&db, client.id)
///     .terrace(&terrace)
///     .status(ReservationStatus::Confirmed)
///     .build()
///     .await?;
/// ```
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    client_id: i32,
    terrace_id: Option<i32>,
    terrace_ref: String,
    terrace_name: String,
    reservation_date: NaiveDate,
    start_time: String,
    end_time: String,
    event_type: String,
    comments: Option<String>,
    guests: i32,
    is_visit: bool,
    status: ReservationStatus,
    total_price: f64,
    origin_offline: bool,
    client_ref: Option<String>,
    sync_log: Option<String>,
}

impl<'a> ReservationFactory<'a> {
    /// Creates a new ReservationFactory with default values.
    ///
    /// Defaults:
    /// - terrace: none (`terrace_id` NULL, ref `"unknown"`, name `"Terraza sin nombre"`)
    /// - reservation_date: today
    /// - start/end time: `"10:00"`–`"12:00"`
    /// - event_type: `"Cumpleaños"`
    /// - guests: `1`
    /// - is_visit: `false`
    /// - status: `ReservationStatus::Pending`
    /// - total_price: `0.0`
    /// - origin_offline: `false`, no client_ref, no sync_log
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `client_id` - User ID of the owning client
    ///
    /// # Returns
    /// - `ReservationFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, client_id: i32) -> Self {
        Self {
            db,
            client_id,
            terrace_id: None,
            terrace_ref: "unknown".to_string(),
            terrace_name: "Terraza sin nombre".to_string(),
            reservation_date: Utc::now().date_naive(),
            start_time: "10:00".to_string(),
            end_time: "12:00".to_string(),
            event_type: "Cumpleaños".to_string(),
            comments: None,
            guests: 1,
            is_visit: false,
            status: ReservationStatus::Pending,
            total_price: 0.0,
            origin_offline: false,
            client_ref: None,
            sync_log: None,
        }
    }

    /// Links the reservation to a catalog terrace.
    ///
    /// Sets the foreign key, the raw reference string and the display name
    /// snapshot from the given terrace.
    pub fn terrace(mut self, terrace: &entity::terrace::Model) -> Self {
        self.terrace_id = Some(terrace.id);
        self.terrace_ref = terrace.id.to_string();
        self.terrace_name = terrace.name.clone();
        self
    }

    /// Sets the raw venue reference string.
    pub fn terrace_ref(mut self, terrace_ref: impl Into<String>) -> Self {
        self.terrace_ref = terrace_ref.into();
        self
    }

    /// Sets the venue display name snapshot.
    pub fn terrace_name(mut self, terrace_name: impl Into<String>) -> Self {
        self.terrace_name = terrace_name.into();
        self
    }

    /// Sets the reservation date.
    pub fn reservation_date(mut self, reservation_date: NaiveDate) -> Self {
        self.reservation_date = reservation_date;
        self
    }

    /// Sets the guest count.
    pub fn guests(mut self, guests: i32) -> Self {
        self.guests = guests;
        self
    }

    /// Sets the visit flag.
    pub fn is_visit(mut self, is_visit: bool) -> Self {
        self.is_visit = is_visit;
        self
    }

    /// Sets the status.
    pub fn status(mut self, status: ReservationStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the total price.
    pub fn total_price(mut self, total_price: f64) -> Self {
        self.total_price = total_price;
        self
    }

    /// Sets the offline-origin flag.
    pub fn origin_offline(mut self, origin_offline: bool) -> Self {
        self.origin_offline = origin_offline;
        self
    }

    /// Sets the client-side temporary identifier.
    pub fn client_ref(mut self, client_ref: Option<String>) -> Self {
        self.client_ref = client_ref;
        self
    }

    /// Sets the sync log text.
    pub fn sync_log(mut self, sync_log: Option<String>) -> Self {
        self.sync_log = sync_log;
        self
    }

    /// Builds and inserts the reservation entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::reservation::Model)` - Created reservation entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        let now = Utc::now();
        entity::reservation::ActiveModel {
            id: ActiveValue::NotSet,
            client_id: ActiveValue::Set(self.client_id),
            terrace_id: ActiveValue::Set(self.terrace_id),
            terrace_ref: ActiveValue::Set(self.terrace_ref),
            terrace_name: ActiveValue::Set(self.terrace_name),
            reservation_date: ActiveValue::Set(self.reservation_date),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            event_type: ActiveValue::Set(self.event_type),
            comments: ActiveValue::Set(self.comments),
            guests: ActiveValue::Set(self.guests),
            is_visit: ActiveValue::Set(self.is_visit),
            status: ActiveValue::Set(self.status),
            total_price: ActiveValue::Set(self.total_price),
            origin_offline: ActiveValue::Set(self.origin_offline),
            client_ref: ActiveValue::Set(self.client_ref),
            sync_log: ActiveValue::Set(self.sync_log),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending reservation with default values for the specified client.
///
/// Shorthand for `ReservationFactory::new(db, client_id).build().await`. The
/// created record references no catalog terrace.
///
/// # Arguments
/// - `db` - Database connection
/// - `client_id` - User ID of the owning client
///
/// # Returns
/// - `Ok(entity::reservation::Model)` - Created reservation entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let reservation = create_reservation(&db, client.id).await?;
/// ```
pub async fn create_reservation(
    db: &DatabaseConnection,
    client_id: i32,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db, client_id).build().await
}
