//! Notification domain parameters.

use entity::notification::{NotificationKind, NotificationPriority};

/// Parameters for creating a notification row.
///
/// Built by the producer helpers in the notification service; handlers never
/// assemble these directly.
#[derive(Debug, Clone)]
pub struct CreateNotificationParams {
    pub user_id: i32,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    /// Context payload echoed back to the client, e.g. the reservation the
    /// notification is about.
    pub data: serde_json::Value,
    pub priority: NotificationPriority,
}

/// Filter and pagination arguments for listing a user's notifications.
#[derive(Debug, Clone)]
pub struct ListNotificationsParams {
    pub user_id: i32,
    /// 1-indexed page as the mobile client sends it.
    pub page: u64,
    pub limit: u64,
    /// When true only unread notifications are returned.
    pub unread_only: bool,
}
