use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for registering an identity document for review.
///
/// Only metadata crosses this API; the document bytes are stored by the
/// external file service.
#[derive(Serialize, Deserialize, Default, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDocumentDto {
    pub file_name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
}

/// Request body for the admin status update endpoint.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDocumentStatusDto {
    pub status: String,
    pub admin_notes: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerificationDocumentDto {
    pub id: i32,
    pub user_id: i32,
    pub file_name: String,
    pub category: String,
    pub description: String,
    pub status: String,
    pub admin_notes: Option<String>,
    pub reviewed_by: Option<i32>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub uploaded_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl VerificationDocumentDto {
    pub fn from_entity(document: entity::verification_document::Model) -> Self {
        Self {
            id: document.id,
            user_id: document.user_id,
            file_name: document.file_name,
            category: document.category.as_str().to_string(),
            description: document.description,
            status: document.status.as_str().to_string(),
            admin_notes: document.admin_notes,
            reviewed_by: document.reviewed_by,
            reviewed_at: document.reviewed_at,
            uploaded_at: document.uploaded_at,
            updated_at: document.updated_at,
        }
    }
}
