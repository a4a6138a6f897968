use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        reservation::{
            CreateReservationDto, HostReservationDto, ReservationCreatedDto, ReservationDecisionDto,
            ReservationDto, ReservationStatusDto,
        },
        sync::{BulkSyncDto, BulkSyncResultDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::{reservation::ReservationService, sync::SyncService},
        state::AppState,
    },
};

/// Tag for grouping reservation endpoints in OpenAPI documentation
pub static RESERVATION_TAG: &str = "reservation";

/// Create a new reservation or visit request.
///
/// Resolves the venue reference against the approved catalog, validates guest
/// count and price, and persists the record with status `pending` regardless
/// of what the caller sent. The terrace owner is notified.
///
/// # Access Control
/// - `Client` - Only clients book terraces
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `payload` - Reservation data (venue ref, date, times, guests, etc.)
///
/// # Returns
/// - `201 Created` - The persisted reservation summary
/// - `400 Bad Request` - Guest count or price out of range
/// - `404 Not Found` - The venue ref names no approved terrace
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Caller is not a client
#[utoipa::path(
    post,
    path = "/api/reservations",
    tag = RESERVATION_TAG,
    request_body = CreateReservationDto,
    responses(
        (status = 201, description = "Reservation created with pending status", body = ApiResponse<ReservationCreatedDto>),
        (status = 400, description = "Invalid guest count or price", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a client", body = ErrorDto),
        (status = 404, description = "Unknown venue reference", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Client])
        .await?;

    let reservation_service = ReservationService::new(&state.db);

    let reservation = reservation_service.create(user.id, payload).await?;

    let message = if reservation.is_visit {
        "✅ Solicitud de visita creada exitosamente"
    } else {
        "✅ Reserva creada exitosamente"
    };

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::message(
            message,
            ReservationCreatedDto::from_entity(reservation),
        )),
    ))
}

/// Get the caller's reservations, newest first.
///
/// # Access Control
/// - `Client` - Only clients have a booking history
///
/// # Returns
/// - `200 OK` - The caller's reservations
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Caller is not a client
#[utoipa::path(
    get,
    path = "/api/reservations/mine",
    tag = RESERVATION_TAG,
    responses(
        (status = 200, description = "The caller's reservations", body = ApiResponse<Vec<ReservationDto>>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a client", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_reservations(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Client])
        .await?;

    let reservation_service = ReservationService::new(&state.db);

    let reservations = reservation_service.list_mine(user.id).await?;

    let reservations_dto: Vec<_> = reservations
        .into_iter()
        .map(ReservationDto::from_entity)
        .collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::message(
            "Reservas obtenidas exitosamente",
            reservations_dto,
        )),
    ))
}

/// Cancel one of the caller's reservations.
///
/// Only pending reservations can be cancelled by the client; a confirmed one
/// must be rejected by the host.
///
/// # Access Control
/// - `Client` - Only the reservation's owner may cancel it
///
/// # Arguments
/// - `reservation_id` - The reservation to cancel
///
/// # Returns
/// - `200 OK` - The reservation, now cancelled
/// - `400 Bad Request` - The current status refuses cancellation
/// - `403 Forbidden` - The reservation belongs to someone else
/// - `404 Not Found` - Unknown reservation id
#[utoipa::path(
    put,
    path = "/api/reservations/{id}/cancel",
    tag = RESERVATION_TAG,
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Reservation cancelled", body = ApiResponse<ReservationStatusDto>),
        (status = 400, description = "Status refuses cancellation", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the reservation's owner", body = ErrorDto),
        (status = 404, description = "Unknown reservation", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_reservation(
    State(state): State<AppState>,
    session: Session,
    Path(reservation_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Client])
        .await?;

    let reservation_service = ReservationService::new(&state.db);

    let reservation = reservation_service.cancel(user.id, reservation_id).await?;

    let message = if reservation.is_visit {
        "✅ Cita cancelada exitosamente"
    } else {
        "✅ Reserva cancelada exitosamente"
    };

    Ok((
        StatusCode::OK,
        Json(ApiResponse::message(
            message,
            ReservationStatusDto {
                id: reservation.id,
                status: reservation.status.as_str().to_string(),
            },
        )),
    ))
}

/// Get reservations on the caller's terraces, newest first.
///
/// Each entry carries the booking client's contact details when the account
/// still exists.
///
/// # Access Control
/// - `Host` - Only hosts review incoming reservations
///
/// # Returns
/// - `200 OK` - Reservations on the caller's terraces
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Caller is not a host
#[utoipa::path(
    get,
    path = "/api/reservations/host",
    tag = RESERVATION_TAG,
    responses(
        (status = 200, description = "Reservations on the caller's terraces", body = ApiResponse<Vec<HostReservationDto>>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a host", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_host_reservations(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Host])
        .await?;

    let reservation_service = ReservationService::new(&state.db);

    let reservations = reservation_service.list_for_host(user.id).await?;

    let reservations_dto: Vec<_> = reservations
        .into_iter()
        .map(|(reservation, client)| HostReservationDto::from_entity(reservation, client))
        .collect();

    Ok((StatusCode::OK, Json(ApiResponse::data(reservations_dto))))
}

/// Confirm a pending reservation on one of the caller's terraces.
///
/// # Access Control
/// - `Host` - Only the terrace's owner may confirm
///
/// # Arguments
/// - `reservation_id` - The reservation to confirm
///
/// # Returns
/// - `200 OK` - The reservation, now confirmed
/// - `400 Bad Request` - The current status refuses confirmation
/// - `403 Forbidden` - The terrace belongs to someone else
/// - `404 Not Found` - Unknown reservation id
#[utoipa::path(
    put,
    path = "/api/reservations/{id}/approve",
    tag = RESERVATION_TAG,
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Reservation confirmed", body = ApiResponse<ReservationDecisionDto>),
        (status = 400, description = "Status refuses confirmation", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the terrace's owner", body = ErrorDto),
        (status = 404, description = "Unknown reservation", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_reservation(
    State(state): State<AppState>,
    session: Session,
    Path(reservation_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Host])
        .await?;

    let reservation_service = ReservationService::new(&state.db);

    let reservation = reservation_service.approve(user.id, reservation_id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::message(
            "Reserva confirmada",
            ReservationDecisionDto::from_entity(reservation),
        )),
    ))
}

/// Reject a reservation on one of the caller's terraces.
///
/// Legal from `pending` and from `confirmed`; rejection and client
/// cancellation share the `cancelled` terminal state.
///
/// # Access Control
/// - `Host` - Only the terrace's owner may reject
///
/// # Arguments
/// - `reservation_id` - The reservation to reject
///
/// # Returns
/// - `200 OK` - The reservation, now cancelled
/// - `400 Bad Request` - The reservation is already terminal
/// - `403 Forbidden` - The terrace belongs to someone else
/// - `404 Not Found` - Unknown reservation id
#[utoipa::path(
    put,
    path = "/api/reservations/{id}/reject",
    tag = RESERVATION_TAG,
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Reservation rejected", body = ApiResponse<ReservationDecisionDto>),
        (status = 400, description = "Reservation already terminal", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the terrace's owner", body = ErrorDto),
        (status = 404, description = "Unknown reservation", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reject_reservation(
    State(state): State<AppState>,
    session: Session,
    Path(reservation_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Host])
        .await?;

    let reservation_service = ReservationService::new(&state.db);

    let reservation = reservation_service.reject(user.id, reservation_id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::message(
            "Reserva rechazada",
            ReservationDecisionDto::from_entity(reservation),
        )),
    ))
}

/// Reconcile a batch of offline reservations.
///
/// Each record is processed independently with permissive defaults; records
/// that fail to parse or validate are logged and skipped without failing the
/// batch. Records carrying a client temporary id are upserted, so resubmitting
/// a batch maps them to their existing server ids instead of duplicating them.
///
/// # Access Control
/// - `Client` - Offline batches are always owned by the submitting client
///
/// # Arguments
/// - `payload` - The offline batch, `{reservations: [...]}`
///
/// # Returns
/// - `200 OK` - Counts and the temporary-id mapping
/// - `400 Bad Request` - `reservations` is not an array
#[utoipa::path(
    post,
    path = "/api/reservations/bulksync",
    tag = RESERVATION_TAG,
    request_body = BulkSyncDto,
    responses(
        (status = 200, description = "Batch reconciled", body = ApiResponse<BulkSyncResultDto>),
        (status = 400, description = "Payload is not an array", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a client", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn bulk_sync_reservations(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<BulkSyncDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Client])
        .await?;

    let sync_service = SyncService::new(&state.db);

    let result = sync_service.bulk_sync(user.id, payload).await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(result))))
}
