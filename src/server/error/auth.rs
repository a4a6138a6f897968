use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user id is stored in the session.
    ///
    /// The request reached a guarded endpoint without logging in first, or the
    /// session expired. Results in a 401 Unauthorized response.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// The session references a user id that no longer exists.
    ///
    /// Happens when an account is deleted while one of its sessions is still
    /// alive. Treated the same as an unauthenticated request.
    #[error("User {0} in session but not in database")]
    UserNotInDatabase(i32),

    /// The authenticated user lacks the role required by the endpoint.
    ///
    /// Results in a 403 Forbidden response. The detail string is logged
    /// server-side and never sent to the client.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),

    /// Login failed because the email is unknown or the password is wrong.
    ///
    /// The two cases are deliberately indistinguishable in the response.
    /// Results in a 401 Unauthorized response.
    #[error("Invalid login credentials")]
    InvalidCredentials,

    /// Registration attempted with an email that already has an account.
    ///
    /// Results in a 409 Conflict response.
    #[error("Account already exists for the given email")]
    EmailExists,

    /// Profile update attempted with an email already owned by another user.
    ///
    /// Results in a 409 Conflict response.
    #[error("Email already in use by another account")]
    EmailInUse,
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and the Spanish
/// client-facing messages of the API contract:
/// - `UserNotInSession` / `UserNotInDatabase` → 401 "Usuario no autenticado"
/// - `InvalidCredentials` → 401 "Email o contraseña inválida"
/// - `AccessDenied` → 403 "No autorizado"
/// - `EmailExists` → 409 "El usuario ya existe"
/// - `EmailInUse` → 409 "El email ya está en uso"
///
/// Denied access is logged with the user id and detail while the client-facing
/// message stays generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("Usuario no autenticado")),
            )
                .into_response(),
            Self::AccessDenied(user_id, detail) => {
                tracing::warn!("Access denied for user {}: {}", user_id, detail);
                (StatusCode::FORBIDDEN, Json(ErrorDto::new("No autorizado"))).into_response()
            }
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("Email o contraseña inválida")),
            )
                .into_response(),
            Self::EmailExists => (
                StatusCode::CONFLICT,
                Json(ErrorDto::new("El usuario ya existe")),
            )
                .into_response(),
            Self::EmailInUse => (
                StatusCode::CONFLICT,
                Json(ErrorDto::new("El email ya está en uso")),
            )
                .into_response(),
        }
    }
}
