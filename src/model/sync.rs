use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for the offline bulk-sync endpoint.
///
/// `reservations` stays an untyped value so the handler can reject non-array
/// payloads with a domain error instead of a deserialization failure, and so a
/// malformed element fails only its own record.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct BulkSyncDto {
    #[serde(default)]
    #[schema(value_type = Object)]
    pub reservations: serde_json::Value,
}

/// One locally-stored reservation as the offline client kept it.
///
/// Every field is optional; missing values are filled with the same defaults
/// the mobile client used when it created the record offline.
#[derive(Serialize, Deserialize, Default, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OfflineReservationDto {
    /// The client's temporary identifier for the record, when it kept one.
    #[serde(alias = "clientId")]
    pub id: Option<String>,
    /// User identity embedded by the offline client. Never trusted for
    /// ownership; preserved in the sync log for traceability.
    #[serde(alias = "clienteId")]
    #[schema(value_type = Option<Object>)]
    pub client: Option<serde_json::Value>,
    #[serde(alias = "terrazaId")]
    pub venue_id: Option<String>,
    #[serde(alias = "terrazaNombre")]
    pub venue_name: Option<String>,
    #[serde(alias = "fechaReserva")]
    pub date: Option<String>,
    #[serde(alias = "horaInicio")]
    pub start_time: Option<String>,
    #[serde(alias = "horaFin")]
    pub end_time: Option<String>,
    #[serde(alias = "tipoEvento")]
    pub event_type: Option<String>,
    #[serde(alias = "comentarios")]
    pub comments: Option<String>,
    #[serde(alias = "invitados")]
    pub guests: Option<i32>,
    #[serde(alias = "esVisita")]
    pub is_visit: Option<bool>,
    #[serde(alias = "precioTotal")]
    pub total_price: Option<f64>,
}

/// Maps a client temporary id to the server id that now holds the record.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SyncMappingDto {
    pub client_id: String,
    pub server_id: i32,
}

/// Outcome of a bulk-sync batch.
///
/// `mapping` holds one entry per persisted record that carried a temporary id,
/// so its length is at most `saved_count`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkSyncResultDto {
    pub saved_count: u64,
    pub received_count: u64,
    pub mapping: Vec<SyncMappingDto>,
}
