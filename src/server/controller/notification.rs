use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        notification::{
            ClearReadDto, MarkAllReadDto, NotificationDto, NotificationListDto, UnreadCountDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::notification::ListNotificationsParams,
        service::notification::NotificationService,
        state::AppState,
    },
};

/// Tag for grouping notification endpoints in OpenAPI documentation
pub static NOTIFICATION_TAG: &str = "notification";

#[derive(Deserialize)]
pub struct NotificationQueryParams {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
    /// When true only unread notifications are returned.
    #[serde(default)]
    pub unread: bool,
}

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    20
}

/// Get the caller's notifications, newest first.
///
/// Paginated; `unread=true` restricts the page and the pagination block to
/// unread rows, while `unreadCount` and `totalCount` always describe the
/// whole inbox.
///
/// # Access Control
/// - Any authenticated user
///
/// # Arguments
/// - `params` - Page (default 1), limit (default 20), unread filter
///
/// # Returns
/// - `200 OK` - One page of notifications plus counters
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = NOTIFICATION_TAG,
    params(
        ("page" = Option<u64>, Query, description = "1-indexed page, default 1"),
        ("limit" = Option<u64>, Query, description = "Page size, default 20"),
        ("unread" = Option<bool>, Query, description = "Only unread notifications")
    ),
    responses(
        (status = 200, description = "One page of notifications", body = ApiResponse<NotificationListDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_notifications(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<NotificationQueryParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let notification_service = NotificationService::new(&state.db);

    let list = notification_service
        .list(ListNotificationsParams {
            user_id: user.id,
            page: params.page,
            limit: params.limit,
            unread_only: params.unread,
        })
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(list))))
}

/// Get the caller's unread notification count.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - The unread count
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    get,
    path = "/api/notifications/unread-count",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "The unread count", body = ApiResponse<UnreadCountDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_unread_count(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let notification_service = NotificationService::new(&state.db);

    let count = notification_service.unread_count(user.id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(count))))
}

/// Mark one of the caller's notifications as read.
///
/// # Access Control
/// - Any authenticated user; foreign notifications read as absent
///
/// # Arguments
/// - `notification_id` - The notification to mark
///
/// # Returns
/// - `200 OK` - The updated notification
/// - `404 Not Found` - Unknown id or not the caller's
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    patch,
    path = "/api/notifications/{id}/read",
    tag = NOTIFICATION_TAG,
    params(
        ("id" = i32, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Notification marked as read", body = ApiResponse<NotificationDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Unknown notification", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_notification_read(
    State(state): State<AppState>,
    session: Session,
    Path(notification_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let notification_service = NotificationService::new(&state.db);

    let notification = notification_service
        .mark_read(user.id, notification_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::message(
            "Notificación marcada como leída",
            notification,
        )),
    ))
}

/// Mark every unread notification of the caller as read.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - How many notifications were updated
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    patch,
    path = "/api/notifications/mark-all-read",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "All notifications marked as read", body = ApiResponse<MarkAllReadDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_all_notifications_read(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let notification_service = NotificationService::new(&state.db);

    let result = notification_service.mark_all_read(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::message(
            "Todas las notificaciones marcadas como leídas",
            result,
        )),
    ))
}

/// Delete one of the caller's notifications.
///
/// # Access Control
/// - Any authenticated user; foreign notifications read as absent
///
/// # Arguments
/// - `notification_id` - The notification to delete
///
/// # Returns
/// - `200 OK` - Notification deleted
/// - `404 Not Found` - Unknown id or not the caller's
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    delete,
    path = "/api/notifications/{id}",
    tag = NOTIFICATION_TAG,
    params(
        ("id" = i32, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Notification deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Unknown notification", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_notification(
    State(state): State<AppState>,
    session: Session,
    Path(notification_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let notification_service = NotificationService::new(&state.db);

    notification_service.delete(user.id, notification_id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::message_only("Notificación eliminada")),
    ))
}

/// Delete every read notification of the caller.
///
/// Unread notifications stay put; the reply carries how many rows went away.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - How many notifications were removed
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    delete,
    path = "/api/notifications/read/clear",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Read notifications removed", body = ApiResponse<ClearReadDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn clear_read_notifications(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let notification_service = NotificationService::new(&state.db);

    let result = notification_service.clear_read(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::message(
            "Notificaciones leídas eliminadas",
            result,
        )),
    ))
}
