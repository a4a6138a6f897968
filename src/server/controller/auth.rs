use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        user::{LoginDto, RegisterDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Creates a user with the provided name, email, and password, defaulting the
/// role to `client` when the requested role is absent or not one of the known
/// roles. The password is stored as a bcrypt hash and a session is established
/// for the new user immediately.
///
/// # Access Control
/// - Public endpoint, no session required
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - Session to bind the new user to
/// - `payload` - Registration data (name, email, password, optional role and phone)
///
/// # Returns
/// - `201 Created` - The created user, sans password hash
/// - `400 Bad Request` - A required field is missing or blank
/// - `409 Conflict` - The email already belongs to an account
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created and session established", body = ApiResponse<UserDto>),
        (status = 400, description = "Missing required fields", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db);

    let user = auth_service.register(payload).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::data(user))))
}

/// Log in with email and password.
///
/// Verifies the credentials against the stored bcrypt hash and establishes a
/// session on success. Unknown emails and wrong passwords are reported with
/// the same message so the two cases cannot be told apart.
///
/// # Access Control
/// - Public endpoint, no session required
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - Session to bind the user to
/// - `payload` - Login credentials (email, password)
///
/// # Returns
/// - `200 OK` - The authenticated user
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Session established", body = ApiResponse<UserDto>),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db);

    let user = auth_service.login(payload).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(user))))
}

/// Log out the current session.
///
/// Clears the session unconditionally; calling this without a session is not
/// an error.
///
/// # Returns
/// - `200 OK` - Session cleared
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Session cleared")
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::message_only("Sesión cerrada exitosamente")),
    ))
}

/// Get the user bound to the current session.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - The session's user
/// - `401 Unauthorized` - No session or the session references a deleted user
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The session's user", body = ApiResponse<UserDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::data(UserDto::from_entity(user))),
    ))
}
