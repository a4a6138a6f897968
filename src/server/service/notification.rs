//! Notification service for inbox queries and event fan-out.
//!
//! Inbox reads and mark-as-read flows live next to the producer hooks the
//! other services call when something notification-worthy happens. Producers
//! only build the row; whether a failed insert aborts the parent operation is
//! the caller's call (in practice callers log and continue).

use sea_orm::DatabaseConnection;

use crate::{
    model::notification::{
        ClearReadDto, MarkAllReadDto, NotificationDto, NotificationListDto, PaginationDto,
        UnreadCountDto,
    },
    server::{
        data::notification::NotificationRepository,
        error::AppError,
        model::notification::{CreateNotificationParams, ListNotificationsParams},
    },
};

use entity::notification::{NotificationKind, NotificationPriority};
use entity::verification_document::DocumentStatus;

/// Service providing inbox queries and notification producers.
pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    /// Creates a new NotificationService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `NotificationService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a user's notifications, newest first, with pagination metadata.
    ///
    /// The wire page number is 1-indexed; page 0 is treated as page 1. The
    /// pagination block counts rows matching the current filter, while
    /// `unread_count` and `total_count` always describe the whole inbox.
    ///
    /// # Arguments
    /// - `params` - Owner, page, limit, and the unread-only filter
    ///
    /// # Returns
    /// - `Ok(NotificationListDto)` - One page of notifications plus counters
    /// - `Err(AppError::DbErr)` - Database error during the queries
    pub async fn list(
        &self,
        params: ListNotificationsParams,
    ) -> Result<NotificationListDto, AppError> {
        let notification_repo = NotificationRepository::new(self.db);

        let page = params.page.max(1);
        let limit = params.limit.max(1);

        let (notifications, total) = notification_repo
            .get_paginated(params.user_id, page - 1, limit, params.unread_only)
            .await?;

        let pages = (total as f64 / limit as f64).ceil() as u64;
        let unread_count = notification_repo.unread_count(params.user_id).await?;
        let total_count = notification_repo.total_count(params.user_id).await?;

        Ok(NotificationListDto {
            notifications: notifications
                .into_iter()
                .map(NotificationDto::from_entity)
                .collect(),
            pagination: PaginationDto {
                page,
                limit,
                total,
                pages,
            },
            unread_count,
            total_count,
        })
    }

    /// Counts the caller's unread notifications.
    pub async fn unread_count(&self, user_id: i32) -> Result<UnreadCountDto, AppError> {
        let notification_repo = NotificationRepository::new(self.db);

        let unread_count = notification_repo.unread_count(user_id).await?;

        Ok(UnreadCountDto { unread_count })
    }

    /// Marks one of the caller's notifications as read.
    ///
    /// A notification belonging to a different user reads as absent, so the
    /// caller cannot probe other inboxes.
    ///
    /// # Arguments
    /// - `user_id` - The authenticated user's id
    /// - `notification_id` - The notification to mark
    ///
    /// # Returns
    /// - `Ok(NotificationDto)` - The updated notification
    /// - `Err(AppError::NotFound)` - Unknown id or not the caller's
    pub async fn mark_read(
        &self,
        user_id: i32,
        notification_id: i32,
    ) -> Result<NotificationDto, AppError> {
        let notification_repo = NotificationRepository::new(self.db);

        let notification = notification_repo
            .mark_read(notification_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Notificación no encontrada".to_string()))?;

        Ok(NotificationDto::from_entity(notification))
    }

    /// Marks every unread notification of the caller as read.
    pub async fn mark_all_read(&self, user_id: i32) -> Result<MarkAllReadDto, AppError> {
        let notification_repo = NotificationRepository::new(self.db);

        let updated_count = notification_repo.mark_all_read(user_id).await?;

        Ok(MarkAllReadDto { updated_count })
    }

    /// Deletes one of the caller's notifications.
    ///
    /// Same owner scoping as `mark_read`: a notification belonging to a
    /// different user reads as absent.
    ///
    /// # Arguments
    /// - `user_id` - The authenticated user's id
    /// - `notification_id` - The notification to delete
    ///
    /// # Returns
    /// - `Ok(())` - The notification is gone
    /// - `Err(AppError::NotFound)` - Unknown id or not the caller's
    pub async fn delete(&self, user_id: i32, notification_id: i32) -> Result<(), AppError> {
        let notification_repo = NotificationRepository::new(self.db);

        let deleted = notification_repo.delete(notification_id, user_id).await?;

        if deleted == 0 {
            return Err(AppError::NotFound(
                "Notificación no encontrada".to_string(),
            ));
        }

        Ok(())
    }

    /// Deletes every read notification of the caller.
    pub async fn clear_read(&self, user_id: i32) -> Result<ClearReadDto, AppError> {
        let notification_repo = NotificationRepository::new(self.db);

        let deleted_count = notification_repo.clear_read(user_id).await?;

        Ok(ClearReadDto { deleted_count })
    }

    /// Notifies a terrace owner of a new reservation on their venue.
    pub async fn notify_reservation_created(
        &self,
        owner_id: i32,
        reservation: &entity::reservation::Model,
    ) -> Result<(), AppError> {
        let notification_repo = NotificationRepository::new(self.db);

        notification_repo
            .create(CreateNotificationParams {
                user_id: owner_id,
                kind: NotificationKind::Reservation,
                title: "Nueva Reserva".to_string(),
                message: format!(
                    "Tienes una nueva reserva para {}",
                    reservation.terrace_name
                ),
                data: serde_json::json!({
                    "reservationId": reservation.id,
                    "terraceName": reservation.terrace_name,
                    "date": reservation.reservation_date,
                    "isVisit": reservation.is_visit,
                }),
                priority: NotificationPriority::High,
            })
            .await?;

        Ok(())
    }

    /// Notifies a client that the host decided on their reservation.
    pub async fn notify_reservation_decision(
        &self,
        reservation: &entity::reservation::Model,
        confirmed: bool,
    ) -> Result<(), AppError> {
        let notification_repo = NotificationRepository::new(self.db);

        let (title, message) = if confirmed {
            (
                "Reserva Confirmada",
                format!(
                    "Tu reserva para {} ha sido confirmada",
                    reservation.terrace_name
                ),
            )
        } else {
            (
                "Reserva Cancelada",
                format!(
                    "Tu reserva para {} ha sido cancelada por el anfitrión",
                    reservation.terrace_name
                ),
            )
        };

        notification_repo
            .create(CreateNotificationParams {
                user_id: reservation.client_id,
                kind: NotificationKind::Reservation,
                title: title.to_string(),
                message,
                data: serde_json::json!({
                    "reservationId": reservation.id,
                    "status": reservation.status.as_str(),
                }),
                priority: NotificationPriority::High,
            })
            .await?;

        Ok(())
    }

    /// Notifies a host that an admin reviewed their publication request.
    pub async fn notify_publication_reviewed(
        &self,
        request: &entity::publication_request::Model,
        approved: bool,
    ) -> Result<(), AppError> {
        let notification_repo = NotificationRepository::new(self.db);

        let (kind, priority, title, message) = if approved {
            (
                NotificationKind::TerraceApproved,
                NotificationPriority::Medium,
                "Terraza Aprobada",
                format!(
                    "Tu terraza \"{}\" ha sido aprobada y ya está publicada",
                    request.name
                ),
            )
        } else {
            (
                NotificationKind::TerraceRejected,
                NotificationPriority::High,
                "Terraza Rechazada",
                format!("Tu solicitud para \"{}\" ha sido rechazada", request.name),
            )
        };

        notification_repo
            .create(CreateNotificationParams {
                user_id: request.owner_id,
                kind,
                title: title.to_string(),
                message,
                data: serde_json::json!({
                    "requestId": request.id,
                    "status": request.status.as_str(),
                    "adminNotes": request.admin_notes,
                }),
                priority,
            })
            .await?;

        Ok(())
    }

    /// Notifies an uploader that an admin reviewed their document.
    pub async fn notify_document_reviewed(
        &self,
        document: &entity::verification_document::Model,
    ) -> Result<(), AppError> {
        let notification_repo = NotificationRepository::new(self.db);

        notification_repo
            .create(CreateNotificationParams {
                user_id: document.user_id,
                kind: NotificationKind::Verification,
                title: "Estado de Documentos".to_string(),
                message: format!(
                    "Tu documento \"{}\" ha sido {}",
                    document.file_name,
                    document_status_word(document.status)
                ),
                data: serde_json::json!({
                    "documentId": document.id,
                    "status": document.status.as_str(),
                }),
                priority: if document.status == DocumentStatus::Rejected {
                    NotificationPriority::High
                } else {
                    NotificationPriority::Medium
                },
            })
            .await?;

        Ok(())
    }
}

/// Spanish past participle for a document review status.
///
/// `under_review` has no participle in the client copy and surfaces raw, as
/// the original product did.
fn document_status_word(status: DocumentStatus) -> &'static str {
    match status {
        DocumentStatus::Approved => "aprobado",
        DocumentStatus::Rejected => "rechazado",
        DocumentStatus::Pending => "pendiente",
        DocumentStatus::UnderReview => "under_review",
    }
}
