use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::verification_document::{RegisterDocumentParams, ReviewDocumentParams};
use entity::verification_document::DocumentStatus;

pub struct VerificationDocumentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VerificationDocumentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers document metadata in `pending` status.
    pub async fn create(
        &self,
        params: RegisterDocumentParams,
    ) -> Result<entity::verification_document::Model, DbErr> {
        let now = Utc::now();

        entity::verification_document::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            file_name: ActiveValue::Set(params.file_name),
            category: ActiveValue::Set(params.category),
            description: ActiveValue::Set(params.description),
            status: ActiveValue::Set(DocumentStatus::Pending),
            uploaded_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::verification_document::Model>, DbErr> {
        entity::prelude::VerificationDocument::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Lists a user's documents, newest upload first.
    pub async fn get_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::verification_document::Model>, DbErr> {
        entity::prelude::VerificationDocument::find()
            .filter(entity::verification_document::Column::UserId.eq(user_id))
            .order_by_desc(entity::verification_document::Column::UploadedAt)
            .all(self.db)
            .await
    }

    /// Records an admin verdict on a document.
    ///
    /// Unlike reservation transitions this is not status-guarded: an admin
    /// may move a document between any of the review states, including back
    /// to `pending`.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The document after the verdict
    /// - `Ok(None)` - No document with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_status(
        &self,
        id: i32,
        params: ReviewDocumentParams,
    ) -> Result<Option<entity::verification_document::Model>, DbErr> {
        let Some(document) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let now = Utc::now();
        let mut active: entity::verification_document::ActiveModel = document.into();
        active.status = ActiveValue::Set(params.status);
        active.admin_notes = ActiveValue::Set(Some(params.admin_notes));
        active.reviewed_by = ActiveValue::Set(Some(params.reviewer_id));
        active.reviewed_at = ActiveValue::Set(Some(now));
        active.updated_at = ActiveValue::Set(now);

        Ok(Some(active.update(self.db).await?))
    }
}
