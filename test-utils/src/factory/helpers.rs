//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use entity::user::UserRole;
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an approved, published terrace owned by the given host.
///
/// Creates the publication request the catalog row has to reference, then the
/// terrace itself. Both entities use default values.
///
/// # Arguments
/// - `db` - Database connection
/// - `owner_id` - User ID of the owning host
///
/// # Returns
/// - `Ok((request, terrace))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_published_terrace(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<
    (
        entity::publication_request::Model,
        entity::terrace::Model,
    ),
    DbErr,
> {
    let request = crate::factory::publication_request::create_publication_request(db, owner_id)
        .await?;
    let terrace = crate::factory::terrace::create_terrace(db, request.id, owner_id).await?;

    Ok((request, terrace))
}

/// Creates a complete reservation hierarchy with all dependencies.
///
/// This is a convenience method that creates:
/// 1. Client user (reservation owner)
/// 2. Host user (terrace owner)
/// 3. Publication request and published terrace
/// 4. Reservation for the terrace, owned by the client
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((client, host, terrace, reservation))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_reservation_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::user::Model,
        entity::terrace::Model,
        entity::reservation::Model,
    ),
    DbErr,
> {
    let client = crate::factory::user::create_user(db).await?;
    let host = crate::factory::user::create_user_with_role(db, UserRole::Host).await?;
    let (_request, terrace) = create_published_terrace(db, host.id).await?;
    let reservation = crate::factory::reservation::ReservationFactory::new(db, client.id)
        .terrace(&terrace)
        .build()
        .await?;

    Ok((client, host, terrace, reservation))
}

/// Creates a reservation with all dependencies for a specific client.
///
/// This creates the host, publication request and terrace structures, then
/// creates a reservation owned by the provided user. Useful when you need to
/// test reservation operations for a specific user.
///
/// # Arguments
/// - `db` - Database connection
/// - `client` - User entity owning the reservation
///
/// # Returns
/// - `Ok((host, terrace, reservation))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_reservation_for_client(
    db: &DatabaseConnection,
    client: &entity::user::Model,
) -> Result<
    (
        entity::user::Model,
        entity::terrace::Model,
        entity::reservation::Model,
    ),
    DbErr,
> {
    let host = crate::factory::user::create_user_with_role(db, UserRole::Host).await?;
    let (_request, terrace) = create_published_terrace(db, host.id).await?;
    let reservation = crate::factory::reservation::ReservationFactory::new(db, client.id)
        .terrace(&terrace)
        .build()
        .await?;

    Ok((host, terrace, reservation))
}
