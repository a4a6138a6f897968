//! Verification document domain parameters.

use entity::verification_document::{DocumentCategory, DocumentStatus};

/// Parameters for registering an uploaded document's metadata for review.
#[derive(Debug, Clone)]
pub struct RegisterDocumentParams {
    pub user_id: i32,
    pub file_name: String,
    pub category: DocumentCategory,
    pub description: String,
}

/// Parameters for an admin decision on a document.
#[derive(Debug, Clone)]
pub struct ReviewDocumentParams {
    pub reviewer_id: i32,
    pub status: DocumentStatus,
    /// Free-form notes shown to the uploader; empty string when omitted.
    pub admin_notes: String,
}
