use crate::server::{
    data::notification::NotificationRepository, model::notification::CreateNotificationParams,
};
use entity::notification::{NotificationKind, NotificationPriority};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory;
use test_utils::factory::notification::NotificationFactory;

mod clear_read;
mod create;
mod mark_all_read;
mod unread_count;
