use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        terrace::TerraceDto,
    },
    server::{error::AppError, service::terrace::TerraceService, state::AppState},
};

/// Tag for grouping terrace catalog endpoints in OpenAPI documentation
pub static TERRACE_TAG: &str = "terrace";

/// Get the published terrace catalog.
///
/// Public endpoint; only approved terraces exist in the catalog, so no
/// filtering happens here.
///
/// # Returns
/// - `200 OK` - Published terraces, newest first
#[utoipa::path(
    get,
    path = "/api/terraces",
    tag = TERRACE_TAG,
    responses(
        (status = 200, description = "The published catalog", body = ApiResponse<Vec<TerraceDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_terraces(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let terrace_service = TerraceService::new(&state.db);

    let terraces = terrace_service.list().await?;

    let terraces_dto: Vec<_> = terraces
        .into_iter()
        .map(|(terrace, owner)| TerraceDto::from_entity(terrace, owner.map(|o| o.name)))
        .collect();

    Ok((StatusCode::OK, Json(ApiResponse::data(terraces_dto))))
}

/// Get one published terrace by id.
///
/// # Arguments
/// - `terrace_id` - The catalog id
///
/// # Returns
/// - `200 OK` - The listing
/// - `404 Not Found` - Unknown or unpublished id
#[utoipa::path(
    get,
    path = "/api/terraces/{id}",
    tag = TERRACE_TAG,
    params(
        ("id" = i32, Path, description = "Terrace ID")
    ),
    responses(
        (status = 200, description = "The listing", body = ApiResponse<TerraceDto>),
        (status = 404, description = "Unknown or unpublished terrace", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_terrace(
    State(state): State<AppState>,
    Path(terrace_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let terrace_service = TerraceService::new(&state.db);

    let (terrace, owner) = terrace_service.get(terrace_id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::data(TerraceDto::from_entity(
            terrace,
            owner.map(|o| o.name),
        ))),
    ))
}
