//! Reservation fixtures for creating in-memory test data.
//!
//! Provides fixture functions for creating reservation entity models without database
//! insertion. These are useful for unit testing, mocking, and providing consistent
//! default values.

use chrono::Utc;
use entity::reservation::{self, ReservationStatus};

/// Default venue reference for records with no resolved terrace.
pub const DEFAULT_TERRACE_REF: &str = "unknown";

/// Default venue name placeholder.
pub const DEFAULT_TERRACE_NAME: &str = "Terraza sin nombre";

/// Default event type.
pub const DEFAULT_EVENT_TYPE: &str = "Cumpleaños";

/// Creates a pending reservation entity model with default values.
///
/// This function creates an in-memory reservation entity without inserting into
/// the database. Use this for unit tests and mocking repository responses.
///
/// # Default Values
/// - id: `1`
/// - client_id: `1`
/// - terrace: unresolved (`terrace_id` None, ref `"unknown"`, placeholder name)
/// - reservation_date: today
/// - start/end time: `"10:00"`–`"12:00"`
/// - status: `ReservationStatus::Pending`
/// - guests: `1`, not a visit, price `0.0`, online origin
///
/// # Returns
/// - `reservation::Model` - In-memory reservation entity
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let reservation = fixture::reservation::entity();
/// assert_eq!(reservation.terrace_ref, "unknown");
/// ```
pub fn entity() -> reservation::Model {
    let now = Utc::now();
    reservation::Model {
        id: 1,
        client_id: 1,
        terrace_id: None,
        terrace_ref: DEFAULT_TERRACE_REF.to_string(),
        terrace_name: DEFAULT_TERRACE_NAME.to_string(),
        reservation_date: now.date_naive(),
        start_time: "10:00".to_string(),
        end_time: "12:00".to_string(),
        event_type: DEFAULT_EVENT_TYPE.to_string(),
        comments: None,
        guests: 1,
        is_visit: false,
        status: ReservationStatus::Pending,
        total_price: 0.0,
        origin_offline: false,
        client_ref: None,
        sync_log: None,
        created_at: now,
        updated_at: now,
    }
}

/// Creates a reservation entity model with a specific status.
///
/// # Arguments
/// - `status` - Status for the model
///
/// # Returns
/// - `reservation::Model` - In-memory reservation entity
pub fn entity_with_status(status: ReservationStatus) -> reservation::Model {
    reservation::Model {
        status,
        ..entity()
    }
}
