use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ApiResponse,
        user::{UpdateProfileDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        service::auth::AuthService,
        state::AppState,
    },
};

/// GET /api/user/profile - Get the current user's profile
///
/// Returns the profile of the authenticated user. The guard already loads the
/// user row for the session, so no further lookup is needed.
///
/// # Authentication
/// Requires user to be logged in (any role)
///
/// # Returns
/// - `200 OK`: The caller's profile
/// - `401 Unauthorized`: No session or the session references a deleted user
pub async fn get_profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::data(UserDto::from_entity(user))),
    ))
}

/// POST /api/user/profile - Update the current user's profile
///
/// Updates name, email, and phone. Name and email are required; the email is
/// stored lowercase and must not belong to another account.
///
/// # Authentication
/// Requires user to be logged in (any role)
///
/// # Returns
/// - `200 OK`: The updated profile
/// - `400 Bad Request`: Name or email is blank
/// - `409 Conflict`: The email belongs to another account
/// - `401 Unauthorized`: No session
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let auth_service = AuthService::new(&state.db);
    let updated = auth_service.update_profile(user.id, payload).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::message("Perfil actualizado correctamente", updated)),
    ))
}

/// DELETE /api/user/profile - Delete the current user's account
///
/// Removes the account and clears the session. Reservations, notifications,
/// and documents owned by the account go with it through the cascading
/// foreign keys.
///
/// # Authentication
/// Requires user to be logged in (any role)
///
/// # Returns
/// - `200 OK`: Account deleted
/// - `401 Unauthorized`: No session
pub async fn delete_profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let auth_service = AuthService::new(&state.db);
    auth_service.delete_profile(user.id).await?;

    AuthSession::new(&session).clear().await;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::message_only("Perfil eliminado correctamente")),
    ))
}
