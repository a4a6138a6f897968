//! Document verification service.
//!
//! Only metadata lives here; the file bytes themselves are held by the
//! external upload service. Admin verdicts are deliberately not
//! status-guarded, a document can be sent back to `pending` for another
//! round of review.

use sea_orm::DatabaseConnection;

use crate::{
    model::verification::{RegisterDocumentDto, UpdateDocumentStatusDto},
    server::{
        data::verification_document::VerificationDocumentRepository,
        error::AppError,
        model::verification_document::{RegisterDocumentParams, ReviewDocumentParams},
        service::notification::NotificationService,
        util::parse::non_empty,
    },
};

use entity::verification_document::{DocumentCategory, DocumentStatus};

/// Service providing business logic for document verification review.
pub struct VerificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VerificationService<'a> {
    /// Creates a new VerificationService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `VerificationService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers an uploaded document's metadata for review.
    ///
    /// The file name is the only hard requirement. The category defaults to
    /// `general` when absent but must parse when given, and the description
    /// falls back to a generated one naming the category.
    ///
    /// # Arguments
    /// - `user_id` - The authenticated uploader's id
    /// - `payload` - Document metadata from the request body
    ///
    /// # Returns
    /// - `Ok(Model)` - The registered document, in `pending` status
    /// - `Err(AppError::BadRequest)` - Missing file name or unknown category
    pub async fn register(
        &self,
        user_id: i32,
        payload: RegisterDocumentDto,
    ) -> Result<entity::verification_document::Model, AppError> {
        let document_repo = VerificationDocumentRepository::new(self.db);

        let file_name = non_empty(payload.file_name).ok_or_else(|| {
            AppError::BadRequest("El nombre del archivo es requerido".to_string())
        })?;

        let category = match non_empty(payload.category) {
            Some(raw) => DocumentCategory::parse(&raw).ok_or_else(|| {
                AppError::BadRequest(
                    "Categoría inválida. Use: identificacion, permisos_terrazas, comprobante_domicilio, general"
                        .to_string(),
                )
            })?,
            None => DocumentCategory::General,
        };

        let description = non_empty(payload.description)
            .unwrap_or_else(|| format!("Imagen de verificación - {}", category.as_str()));

        let document = document_repo
            .create(RegisterDocumentParams {
                user_id,
                file_name,
                category,
                description,
            })
            .await?;

        Ok(document)
    }

    /// Lists a user's documents, newest upload first.
    pub async fn list_for_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::verification_document::Model>, AppError> {
        let document_repo = VerificationDocumentRepository::new(self.db);

        let documents = document_repo.get_by_user(user_id).await?;

        Ok(documents)
    }

    /// Records an admin verdict on a document and notifies the uploader.
    ///
    /// The status must name one of the review states; the reviewer and
    /// review time are stamped alongside the notes. Notification failures
    /// are logged and never undo the verdict.
    ///
    /// # Arguments
    /// - `reviewer_id` - The authenticated admin's id
    /// - `document_id` - The document under review
    /// - `payload` - The verdict and optional notes
    ///
    /// # Returns
    /// - `Ok(Model)` - The document after the verdict
    /// - `Err(AppError::BadRequest)` - The status names no review state
    /// - `Err(AppError::NotFound)` - Unknown document id
    pub async fn update_status(
        &self,
        reviewer_id: i32,
        document_id: i32,
        payload: UpdateDocumentStatusDto,
    ) -> Result<entity::verification_document::Model, AppError> {
        let document_repo = VerificationDocumentRepository::new(self.db);

        let status = DocumentStatus::parse(&payload.status).ok_or_else(|| {
            AppError::BadRequest(
                "Estado inválido. Use: pending, approved, rejected, under_review".to_string(),
            )
        })?;

        let document = document_repo
            .update_status(
                document_id,
                ReviewDocumentParams {
                    reviewer_id,
                    status,
                    admin_notes: non_empty(payload.admin_notes).unwrap_or_default(),
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Documento no encontrado".to_string()))?;

        if let Err(err) = NotificationService::new(self.db)
            .notify_document_reviewed(&document)
            .await
        {
            tracing::warn!(
                "Failed to notify user {} about document {}: {}",
                document.user_id,
                document.id,
                err
            );
        }

        Ok(document)
    }
}
