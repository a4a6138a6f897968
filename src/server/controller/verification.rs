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
        verification::{RegisterDocumentDto, UpdateDocumentStatusDto, VerificationDocumentDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::verification::VerificationService,
        state::AppState,
    },
};

/// Tag for grouping document verification endpoints in OpenAPI documentation
pub static VERIFICATION_TAG: &str = "verification";

/// Register an identity document for review.
///
/// Stores the document metadata with status `pending`; the file bytes
/// themselves live in the external file service.
///
/// # Access Control
/// - Any authenticated user
///
/// # Arguments
/// - `payload` - Document metadata (file name, category, description)
///
/// # Returns
/// - `201 Created` - The registered document
/// - `400 Bad Request` - Missing file name or unknown category
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    post,
    path = "/api/document-verification",
    tag = VERIFICATION_TAG,
    request_body = RegisterDocumentDto,
    responses(
        (status = 201, description = "Document registered for review", body = ApiResponse<VerificationDocumentDto>),
        (status = 400, description = "Missing file name or unknown category", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_document(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RegisterDocumentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let verification_service = VerificationService::new(&state.db);

    let document = verification_service.register(user.id, payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::message(
            "✅ Documento registrado exitosamente",
            VerificationDocumentDto::from_entity(document),
        )),
    ))
}

/// Get the caller's verification documents, newest first.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - The caller's documents
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    get,
    path = "/api/document-verification/mine",
    tag = VERIFICATION_TAG,
    responses(
        (status = 200, description = "The caller's documents", body = ApiResponse<Vec<VerificationDocumentDto>>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_documents(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let verification_service = VerificationService::new(&state.db);

    let documents = verification_service.list_for_user(user.id).await?;

    let documents_dto: Vec<_> = documents
        .into_iter()
        .map(VerificationDocumentDto::from_entity)
        .collect();

    Ok((StatusCode::OK, Json(ApiResponse::data(documents_dto))))
}

/// Get one user's verification documents, newest first.
///
/// # Access Control
/// - `Admin` - Only admins review other users' documents
///
/// # Arguments
/// - `user_id` - The user whose documents to fetch
///
/// # Returns
/// - `200 OK` - That user's documents
/// - `401 Unauthorized` - User not authenticated or not an admin
#[utoipa::path(
    get,
    path = "/api/document-verification/user/{user_id}",
    tag = VERIFICATION_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "That user's documents", body = ApiResponse<Vec<VerificationDocumentDto>>),
        (status = 401, description = "User not authenticated or not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_documents(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let verification_service = VerificationService::new(&state.db);

    let documents = verification_service.list_for_user(user_id).await?;

    let documents_dto: Vec<_> = documents
        .into_iter()
        .map(VerificationDocumentDto::from_entity)
        .collect();

    Ok((StatusCode::OK, Json(ApiResponse::data(documents_dto))))
}

/// Update a document's verification status.
///
/// Stamps the reviewer, notes, and review date, then notifies the uploader.
/// The success message echoes the requested status the way the clients
/// expect, e.g. "Documento approved exitosamente".
///
/// # Access Control
/// - `Admin` - Only admins verify documents
///
/// # Arguments
/// - `document_id` - The document to update
/// - `payload` - New status and optional admin notes
///
/// # Returns
/// - `200 OK` - The updated document
/// - `400 Bad Request` - Unknown status
/// - `404 Not Found` - Unknown document id
/// - `401 Unauthorized` - User not authenticated or not an admin
#[utoipa::path(
    put,
    path = "/api/document-verification/{id}/status",
    tag = VERIFICATION_TAG,
    params(
        ("id" = i32, Path, description = "Document ID")
    ),
    request_body = UpdateDocumentStatusDto,
    responses(
        (status = 200, description = "Document status updated", body = ApiResponse<VerificationDocumentDto>),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 401, description = "User not authenticated or not an admin", body = ErrorDto),
        (status = 404, description = "Unknown document", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_document_status(
    State(state): State<AppState>,
    session: Session,
    Path(document_id): Path<i32>,
    Json(payload): Json<UpdateDocumentStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let verification_service = VerificationService::new(&state.db);

    let status = payload.status.clone();
    let document = verification_service
        .update_status(user.id, document_id, payload)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::message(
            format!("Documento {} exitosamente", status),
            VerificationDocumentDto::from_entity(document),
        )),
    ))
}
