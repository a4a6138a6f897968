use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::notification::CreateNotificationParams;

pub struct NotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a notification for a user's inbox.
    pub async fn create(
        &self,
        params: CreateNotificationParams,
    ) -> Result<entity::notification::Model, DbErr> {
        let now = Utc::now();

        entity::notification::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            kind: ActiveValue::Set(params.kind),
            title: ActiveValue::Set(params.title),
            message: ActiveValue::Set(params.message),
            data: ActiveValue::Set(params.data),
            read: ActiveValue::Set(false),
            priority: ActiveValue::Set(params.priority),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a page of a user's notifications, newest first.
    ///
    /// # Arguments
    /// - `user_id` - Inbox owner
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of notifications per page
    /// - `unread_only` - Restrict to unread notifications
    ///
    /// # Returns
    /// - `Ok((notifications, total))` - Page contents and total count for the
    ///   same filter
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
        unread_only: bool,
    ) -> Result<(Vec<entity::notification::Model>, u64), DbErr> {
        let mut query = entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id));

        if unread_only {
            query = query.filter(entity::notification::Column::Read.eq(false));
        }

        let paginator = query
            .order_by_desc(entity::notification::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let notifications = paginator.fetch_page(page).await?;

        Ok((notifications, total))
    }

    pub async fn unread_count(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::Read.eq(false))
            .count(self.db)
            .await
    }

    pub async fn total_count(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .count(self.db)
            .await
    }

    /// Marks one notification as read, scoped to its owner.
    ///
    /// The owner filter keeps one user from touching another's inbox; an id
    /// that exists under a different owner reads as absent.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The notification after marking
    /// - `Ok(None)` - No such notification in this user's inbox
    /// - `Err(DbErr)` - Database error during update
    pub async fn mark_read(
        &self,
        id: i32,
        user_id: i32,
    ) -> Result<Option<entity::notification::Model>, DbErr> {
        let notification = entity::prelude::Notification::find_by_id(id)
            .filter(entity::notification::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        let Some(notification) = notification else {
            return Ok(None);
        };

        let mut active: entity::notification::ActiveModel = notification.into();
        active.read = ActiveValue::Set(true);
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }

    /// Marks every unread notification in a user's inbox as read.
    ///
    /// # Returns
    /// - `Ok(rows_affected)` - Number of notifications flipped to read
    /// - `Err(DbErr)` - Database error during update
    pub async fn mark_all_read(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Notification::update_many()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::Read.eq(false))
            .col_expr(
                entity::notification::Column::Read,
                sea_orm::sea_query::Expr::value(true),
            )
            .col_expr(
                entity::notification::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes one notification, scoped to its owner.
    ///
    /// Same owner filter as `mark_read`: an id under a different owner deletes
    /// nothing.
    ///
    /// # Returns
    /// - `Ok(rows_affected)` - 1 when the row was in this user's inbox, else 0
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Notification::delete_many()
            .filter(entity::notification::Column::Id.eq(id))
            .filter(entity::notification::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every read notification in a user's inbox.
    ///
    /// # Returns
    /// - `Ok(rows_affected)` - Number of notifications removed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn clear_read(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Notification::delete_many()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::Read.eq(true))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
