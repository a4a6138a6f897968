use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for submitting a terrace listing for review.
///
/// Required fields stay optional at the serde level so the handler can return
/// a single error listing every missing field instead of a deserialization
/// failure on the first one.
#[derive(Serialize, Deserialize, Default, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitPublicationDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub capacity: Option<i32>,
    pub location: Option<String>,
    pub price: Option<f64>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    #[schema(value_type = Option<Vec<String>>)]
    pub amenities: Option<serde_json::Value>,
    pub rules: Option<String>,
}

/// Request body for the admin approve and reject endpoints.
#[derive(Serialize, Deserialize, Default, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPublicationDto {
    pub admin_notes: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicationRequestDto {
    pub id: i32,
    pub owner_id: i32,
    pub name: String,
    pub description: String,
    pub capacity: i32,
    pub location: String,
    pub price: f64,
    pub contact_phone: String,
    pub contact_email: String,
    #[schema(value_type = Vec<String>)]
    pub amenities: serde_json::Value,
    pub rules: Option<String>,
    pub status: String,
    pub admin_notes: Option<String>,
    pub reviewed_by: Option<i32>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl PublicationRequestDto {
    pub fn from_entity(request: entity::publication_request::Model) -> Self {
        Self {
            id: request.id,
            owner_id: request.owner_id,
            name: request.name,
            description: request.description,
            capacity: request.capacity,
            location: request.location,
            price: request.price,
            contact_phone: request.contact_phone,
            contact_email: request.contact_email,
            amenities: request.amenities,
            rules: request.rules,
            status: request.status.as_str().to_string(),
            admin_notes: request.admin_notes,
            reviewed_by: request.reviewed_by,
            reviewed_at: request.reviewed_at,
            created_at: request.created_at,
        }
    }
}
