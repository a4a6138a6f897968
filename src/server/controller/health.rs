use axum::{
    http::{Method, StatusCode, Uri},
    response::IntoResponse,
    Json,
};

use crate::model::api::{HealthDto, RouteNotFoundDto};

/// GET / - Liveness probe
///
/// Reports the service name and crate version. No authentication and no
/// database access, so a failing probe always means the process itself.
pub async fn get_health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthDto {
            ok: true,
            name: "TerraceRent API".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// Router fallback for unknown paths.
///
/// Mobile clients key on this body shape to distinguish a wrong URL from an
/// unreachable server.
pub async fn not_found(method: Method, uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(RouteNotFoundDto {
            success: false,
            message: "Ruta no encontrada".to_string(),
            path: uri.path().to_string(),
            method: method.to_string(),
        }),
    )
}
