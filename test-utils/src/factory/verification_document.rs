//! Verification document factory for creating test document entities.
//!
//! This module provides factory methods for creating verification document
//! entities with sensible defaults, reducing boilerplate in tests. The factory
//! supports customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::verification_document::{DocumentCategory, DocumentStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test verification documents with customizable fields.
///
/// Provides a builder pattern for creating verification document entities
/// with default values that can be overridden as needed for specific test
/// scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use entity::verification_document::{DocumentCategory, DocumentStatus};
/// use test_utils::factory::verification_document::VerificationDocumentFactory;
///
/// let document = VerificationDocumentFactory::new(&db, user.id)
///     .category(DocumentCategory::Identification)
///     .status(DocumentStatus::UnderReview)
///     .build()
///     .await?;
/// ```
pub struct VerificationDocumentFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    file_name: String,
    category: DocumentCategory,
    description: String,
    status: DocumentStatus,
}

impl<'a> VerificationDocumentFactory<'a> {
    /// Creates a new VerificationDocumentFactory with default values.
    ///
    /// Defaults:
    /// - file_name: `"document-{id}.pdf"` where id is auto-incremented
    /// - category: `DocumentCategory::General`
    /// - description: empty
    /// - status: `DocumentStatus::Pending`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - User ID of the uploader
    ///
    /// # Returns
    /// - `VerificationDocumentFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            file_name: format!("document-{}.pdf", id),
            category: DocumentCategory::General,
            description: String::new(),
            status: DocumentStatus::Pending,
        }
    }

    /// Sets the file name.
    pub fn file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Sets the document category.
    pub fn category(mut self, category: DocumentCategory) -> Self {
        self.category = category;
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the review status.
    pub fn status(mut self, status: DocumentStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the verification document entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::verification_document::Model)` - Created document entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::verification_document::Model, DbErr> {
        let now = Utc::now();
        entity::verification_document::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.user_id),
            file_name: ActiveValue::Set(self.file_name),
            category: ActiveValue::Set(self.category),
            description: ActiveValue::Set(self.description),
            status: ActiveValue::Set(self.status),
            admin_notes: ActiveValue::Set(None),
            reviewed_by: ActiveValue::Set(None),
            reviewed_at: ActiveValue::Set(None),
            uploaded_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending verification document with default values.
///
/// Shorthand for `VerificationDocumentFactory::new(db, user_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - User ID of the uploader
///
/// # Returns
/// - `Ok(entity::verification_document::Model)` - Created document entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_verification_document(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::verification_document::Model, DbErr> {
    VerificationDocumentFactory::new(db, user_id).build().await
}
