use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public catalog entry for an approved terrace.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TerraceDto {
    pub id: i32,
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
    /// Display name of the host, when the owning account still exists.
    pub owner_name: Option<String>,
    pub published_at: DateTime<Utc>,
}

impl TerraceDto {
    pub fn from_entity(terrace: entity::terrace::Model, owner_name: Option<String>) -> Self {
        Self {
            id: terrace.id,
            name: terrace.name,
            description: terrace.description,
            capacity: terrace.capacity,
            location: terrace.location,
            price: terrace.price,
            contact_phone: terrace.contact_phone,
            contact_email: terrace.contact_email,
            amenities: terrace.amenities,
            rules: terrace.rules,
            owner_name,
            published_at: terrace.published_at,
        }
    }
}
