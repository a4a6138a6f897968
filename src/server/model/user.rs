//! User domain parameters.

use entity::user::UserRole;

/// Parameters for inserting an account row.
///
/// The service hashes the submitted password before building these; the
/// repository never sees plain text.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    /// Stored lowercase; uniqueness is enforced by the database.
    pub email: String,
    pub password_hash: String,
    pub phone: Option<String>,
    pub role: UserRole,
}

/// Parameters for updating the caller's own profile.
#[derive(Debug, Clone)]
pub struct UpdateProfileParams {
    pub name: String,
    pub email: String,
    /// `None` leaves the stored phone number untouched.
    pub phone: Option<String>,
}
