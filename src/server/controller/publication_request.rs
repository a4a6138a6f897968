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
        publication::{PublicationRequestDto, ReviewPublicationDto, SubmitPublicationDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::publication::PublicationService,
        state::AppState,
    },
};

/// Tag for grouping publication request endpoints in OpenAPI documentation
pub static PUBLICATION_TAG: &str = "publication";

/// Status filter for the admin listing endpoint.
#[derive(Deserialize)]
pub struct PublicationListParams {
    pub status: Option<String>,
}

/// Submit a terrace for publication review.
///
/// Validates that every required field is present and in range, then stores
/// the request with status `pending` for an admin to review.
///
/// # Access Control
/// - `Host` - Only hosts publish terraces
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `payload` - Listing data (name, description, capacity, location, price, contacts)
///
/// # Returns
/// - `201 Created` - The stored request
/// - `400 Bad Request` - Missing fields (all named) or out-of-range capacity/price
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Caller is not a host
#[utoipa::path(
    post,
    path = "/api/publication-requests",
    tag = PUBLICATION_TAG,
    request_body = SubmitPublicationDto,
    responses(
        (status = 201, description = "Request submitted for review", body = ApiResponse<PublicationRequestDto>),
        (status = 400, description = "Missing or invalid fields", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a host", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_publication_request(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SubmitPublicationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Host])
        .await?;

    let publication_service = PublicationService::new(&state.db);

    let request = publication_service.submit(user.id, payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::message(
            "Terraza publicada exitosamente y enviada para revisión",
            PublicationRequestDto::from_entity(request),
        )),
    ))
}

/// Get the caller's own publication requests, newest first.
///
/// # Access Control
/// - `Host` - Only hosts have publication requests
///
/// # Returns
/// - `200 OK` - The caller's requests
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Caller is not a host
#[utoipa::path(
    get,
    path = "/api/publication-requests/mine",
    tag = PUBLICATION_TAG,
    responses(
        (status = 200, description = "The caller's requests", body = ApiResponse<Vec<PublicationRequestDto>>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a host", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_publication_requests(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Host])
        .await?;

    let publication_service = PublicationService::new(&state.db);

    let requests = publication_service.list_mine(user.id).await?;

    let requests_dto: Vec<_> = requests
        .into_iter()
        .map(PublicationRequestDto::from_entity)
        .collect();

    Ok((StatusCode::OK, Json(ApiResponse::data(requests_dto))))
}

/// Get the review queue, optionally filtered by status.
///
/// # Access Control
/// - `Admin` - Only admins review publication requests
///
/// # Arguments
/// - `params` - Optional `status` filter (pending, approved, rejected)
///
/// # Returns
/// - `200 OK` - Matching requests, newest first
/// - `400 Bad Request` - Unknown status filter
/// - `401 Unauthorized` - User not authenticated or not an admin
#[utoipa::path(
    get,
    path = "/api/publication-requests",
    tag = PUBLICATION_TAG,
    params(
        ("status" = Option<String>, Query, description = "Filter by status (pending, approved, rejected)")
    ),
    responses(
        (status = 200, description = "Matching requests", body = ApiResponse<Vec<PublicationRequestDto>>),
        (status = 400, description = "Unknown status filter", body = ErrorDto),
        (status = 401, description = "User not authenticated or not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_publication_requests(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PublicationListParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let publication_service = PublicationService::new(&state.db);

    let requests = publication_service.list(params.status).await?;

    let requests_dto: Vec<_> = requests
        .into_iter()
        .map(PublicationRequestDto::from_entity)
        .collect();

    Ok((StatusCode::OK, Json(ApiResponse::data(requests_dto))))
}

/// Get one publication request by id.
///
/// # Access Control
/// - `Admin` - Only admins review publication requests
///
/// # Arguments
/// - `request_id` - The request to fetch
///
/// # Returns
/// - `200 OK` - The request
/// - `404 Not Found` - Unknown request id
/// - `401 Unauthorized` - User not authenticated or not an admin
#[utoipa::path(
    get,
    path = "/api/publication-requests/{id}",
    tag = PUBLICATION_TAG,
    params(
        ("id" = i32, Path, description = "Publication request ID")
    ),
    responses(
        (status = 200, description = "The request", body = ApiResponse<PublicationRequestDto>),
        (status = 401, description = "User not authenticated or not an admin", body = ErrorDto),
        (status = 404, description = "Unknown request", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_publication_request(
    State(state): State<AppState>,
    session: Session,
    Path(request_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let publication_service = PublicationService::new(&state.db);

    let request = publication_service.get_by_id(request_id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::data(PublicationRequestDto::from_entity(
            request,
        ))),
    ))
}

/// Approve a pending publication request.
///
/// Stamps the reviewer and notes, publishes the terrace to the public
/// catalog, and notifies the owner.
///
/// # Access Control
/// - `Admin` - Only admins approve publication requests
///
/// # Arguments
/// - `request_id` - The request to approve
/// - `payload` - Optional admin notes
///
/// # Returns
/// - `200 OK` - The approved request
/// - `400 Bad Request` - The request is no longer pending
/// - `404 Not Found` - Unknown request id
/// - `401 Unauthorized` - User not authenticated or not an admin
#[utoipa::path(
    put,
    path = "/api/publication-requests/{id}/approve",
    tag = PUBLICATION_TAG,
    params(
        ("id" = i32, Path, description = "Publication request ID")
    ),
    request_body = ReviewPublicationDto,
    responses(
        (status = 200, description = "Request approved and terrace published", body = ApiResponse<PublicationRequestDto>),
        (status = 400, description = "Request is not pending", body = ErrorDto),
        (status = 401, description = "User not authenticated or not an admin", body = ErrorDto),
        (status = 404, description = "Unknown request", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_publication_request(
    State(state): State<AppState>,
    session: Session,
    Path(request_id): Path<i32>,
    Json(payload): Json<ReviewPublicationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let publication_service = PublicationService::new(&state.db);

    let request = publication_service
        .approve(user.id, request_id, payload)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::message(
            "Solicitud aprobada",
            PublicationRequestDto::from_entity(request),
        )),
    ))
}

/// Reject a pending publication request.
///
/// Stamps the reviewer and notes and notifies the owner. Nothing is
/// published.
///
/// # Access Control
/// - `Admin` - Only admins reject publication requests
///
/// # Arguments
/// - `request_id` - The request to reject
/// - `payload` - Optional admin notes
///
/// # Returns
/// - `200 OK` - The rejected request
/// - `400 Bad Request` - The request is no longer pending
/// - `404 Not Found` - Unknown request id
/// - `401 Unauthorized` - User not authenticated or not an admin
#[utoipa::path(
    put,
    path = "/api/publication-requests/{id}/reject",
    tag = PUBLICATION_TAG,
    params(
        ("id" = i32, Path, description = "Publication request ID")
    ),
    request_body = ReviewPublicationDto,
    responses(
        (status = 200, description = "Request rejected", body = ApiResponse<PublicationRequestDto>),
        (status = 400, description = "Request is not pending", body = ErrorDto),
        (status = 401, description = "User not authenticated or not an admin", body = ErrorDto),
        (status = 404, description = "Unknown request", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reject_publication_request(
    State(state): State<AppState>,
    session: Session,
    Path(request_id): Path<i32>,
    Json(payload): Json<ReviewPublicationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let publication_service = PublicationService::new(&state.db);

    let request = publication_service
        .reject(user.id, request_id, payload)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::message(
            "Solicitud rechazada",
            PublicationRequestDto::from_entity(request),
        )),
    ))
}
