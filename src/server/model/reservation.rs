//! Reservation domain parameters.
//!
//! Defines the parameter types used to persist reservations, shared by the
//! interactive create endpoint and the offline bulk-sync reconciler.

use chrono::NaiveDate;

/// Parameters for persisting a new reservation row.
///
/// By the time these exist every permissive default has been applied and the
/// venue reference has been resolved against the catalog. The repository
/// forces the initial status to pending; it is not a parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateReservationParams {
    /// Authenticated owner of the reservation. Never taken from payload data.
    pub client_id: i32,
    /// Resolved catalog venue, when the reference named one.
    pub terrace_id: Option<i32>,
    /// The venue reference exactly as the client supplied it.
    pub terrace_ref: String,
    /// Display name snapshot taken at creation time.
    pub terrace_name: String,
    pub reservation_date: NaiveDate,
    /// Wall-clock `HH:MM`; stored as given, no format validation.
    pub start_time: String,
    pub end_time: String,
    pub event_type: String,
    pub comments: Option<String>,
    pub guests: i32,
    /// Whether this is a short visit rather than a full rental. Immutable
    /// after creation.
    pub is_visit: bool,
    pub total_price: f64,
    /// True when the record was reconciled from an offline batch.
    pub origin_offline: bool,
    /// The offline client's temporary identifier, used for idempotent resync.
    pub client_ref: Option<String>,
    /// Free-form reconciliation notes kept for traceability.
    pub sync_log: Option<String>,
}
