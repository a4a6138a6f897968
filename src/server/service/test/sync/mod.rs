use crate::{
    model::sync::BulkSyncDto,
    server::{data::reservation::ReservationRepository, error::AppError, service::sync::SyncService},
};
use entity::reservation::ReservationStatus;
use entity::user::UserRole;
use serde_json::json;
use test_utils::builder::TestBuilder;
use test_utils::factory;
use test_utils::factory::helpers::create_published_terrace;
