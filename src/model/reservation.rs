use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for creating a reservation or visit request.
///
/// Canonical field names are camelCase; the serde aliases accept the Spanish
/// field names still sent by the first-generation mobile client.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationDto {
    /// Reference to the venue being reserved, as the client knows it.
    #[serde(alias = "terrazaId")]
    pub venue_id: String,
    /// Display name snapshot sent by legacy clients; the catalog name wins.
    #[serde(alias = "terrazaNombre")]
    pub venue_name: Option<String>,
    /// Reservation date as a string; absent or unparseable falls back to today.
    #[serde(alias = "fechaReserva")]
    pub date: Option<String>,
    #[serde(alias = "horaInicio")]
    pub start_time: String,
    #[serde(alias = "horaFin")]
    pub end_time: String,
    #[serde(alias = "tipoEvento")]
    pub event_type: Option<String>,
    #[serde(alias = "comentarios")]
    pub comments: Option<String>,
    #[serde(alias = "invitados")]
    pub guests: Option<i32>,
    #[serde(alias = "esVisita", default)]
    pub is_visit: bool,
    #[serde(alias = "precioTotal")]
    pub total_price: Option<f64>,
}

/// Full reservation representation returned by list endpoints.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDto {
    pub id: i32,
    pub client_id: i32,
    /// Resolved catalog venue; `None` when an offline record referenced an
    /// unknown venue.
    pub venue_id: Option<i32>,
    pub venue_ref: String,
    pub venue_name: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub event_type: String,
    pub comments: Option<String>,
    pub guests: i32,
    pub is_visit: bool,
    pub status: String,
    pub total_price: f64,
    pub origin_offline: bool,
    pub client_ref: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ReservationDto {
    pub fn from_entity(reservation: entity::reservation::Model) -> Self {
        Self {
            id: reservation.id,
            client_id: reservation.client_id,
            venue_id: reservation.terrace_id,
            venue_ref: reservation.terrace_ref,
            venue_name: reservation.terrace_name,
            date: reservation.reservation_date,
            start_time: reservation.start_time,
            end_time: reservation.end_time,
            event_type: reservation.event_type,
            comments: reservation.comments,
            guests: reservation.guests,
            is_visit: reservation.is_visit,
            status: reservation.status.as_str().to_string(),
            total_price: reservation.total_price,
            origin_offline: reservation.origin_offline,
            client_ref: reservation.client_ref,
            created_at: reservation.created_at,
            updated_at: reservation.updated_at,
        }
    }
}

/// A reservation as the host review surface sees it, with the booking
/// client's contact card attached.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HostReservationDto {
    #[serde(flatten)]
    pub reservation: ReservationDto,
    pub client: Option<ClientContactDto>,
}

impl HostReservationDto {
    pub fn from_entity(
        reservation: entity::reservation::Model,
        client: Option<entity::user::Model>,
    ) -> Self {
        Self {
            reservation: ReservationDto::from_entity(reservation),
            client: client.map(|client| ClientContactDto {
                id: client.id,
                name: client.name,
                email: client.email,
                phone: client.phone,
            }),
        }
    }
}

/// Contact card embedded in host-facing reservation listings.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientContactDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

/// Payload returned by the create endpoint.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationCreatedDto {
    pub id: i32,
    pub venue_name: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub status: String,
    pub is_visit: bool,
}

impl ReservationCreatedDto {
    pub fn from_entity(reservation: entity::reservation::Model) -> Self {
        Self {
            id: reservation.id,
            venue_name: reservation.terrace_name,
            date: reservation.reservation_date,
            start_time: reservation.start_time,
            end_time: reservation.end_time,
            status: reservation.status.as_str().to_string(),
            is_visit: reservation.is_visit,
        }
    }
}

/// Payload returned by the client cancel endpoint.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationStatusDto {
    pub id: i32,
    pub status: String,
}

/// Payload returned by the host approve and reject endpoints.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDecisionDto {
    pub id: i32,
    pub status: String,
    pub venue_name: String,
    pub date: NaiveDate,
}

impl ReservationDecisionDto {
    pub fn from_entity(reservation: entity::reservation::Model) -> Self {
        Self {
            id: reservation.id,
            status: reservation.status.as_str().to_string(),
            venue_name: reservation.terrace_name,
            date: reservation.reservation_date,
        }
    }
}
