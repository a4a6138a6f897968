//! Notification factory for creating test notification entities.
//!
//! This module provides factory methods for creating notification entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::notification::{NotificationKind, NotificationPriority};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test notifications with customizable fields.
///
/// Provides a builder pattern for creating notification entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use entity::notification::NotificationKind;
/// use test_utils::factory::notification::NotificationFactory;
///
/// let notification = NotificationFactory::new(&db, user.id)
///     .kind(NotificationKind::Reservation)
///     .read(true)
///     .build()
///     .await?;
/// ```
pub struct NotificationFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    kind: NotificationKind,
    title: String,
    message: String,
    data: serde_json::Value,
    read: bool,
    priority: NotificationPriority,
}

impl<'a> NotificationFactory<'a> {
    /// Creates a new NotificationFactory with default values.
    ///
    /// Defaults:
    /// - kind: `NotificationKind::System`
    /// - title: `"Notification {id}"` where id is auto-incremented
    /// - message: a short test message
    /// - data: `{}`
    /// - read: `false`
    /// - priority: `NotificationPriority::Medium`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - User ID of the recipient
    ///
    /// # Returns
    /// - `NotificationFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            kind: NotificationKind::System,
            title: format!("Notification {}", id),
            message: "Test notification message".to_string(),
            data: serde_json::json!({}),
            read: false,
            priority: NotificationPriority::Medium,
        }
    }

    /// Sets the notification kind.
    pub fn kind(mut self, kind: NotificationKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the message body.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Sets the read flag.
    pub fn read(mut self, read: bool) -> Self {
        self.read = read;
        self
    }

    /// Sets the priority.
    pub fn priority(mut self, priority: NotificationPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Builds and inserts the notification entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::notification::Model)` - Created notification entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::notification::Model, DbErr> {
        let now = Utc::now();
        entity::notification::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.user_id),
            kind: ActiveValue::Set(self.kind),
            title: ActiveValue::Set(self.title),
            message: ActiveValue::Set(self.message),
            data: ActiveValue::Set(self.data),
            read: ActiveValue::Set(self.read),
            priority: ActiveValue::Set(self.priority),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unread system notification with default values.
///
/// Shorthand for `NotificationFactory::new(db, user_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - User ID of the recipient
///
/// # Returns
/// - `Ok(entity::notification::Model)` - Created notification entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_notification(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::notification::Model, DbErr> {
    NotificationFactory::new(db, user_id).build().await
}
