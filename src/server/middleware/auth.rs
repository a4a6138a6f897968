use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
};

use entity::user::UserRole;

/// Role a guarded endpoint may demand from the caller.
///
/// Roles are matched strictly: an admin does not implicitly satisfy `Host`,
/// mirroring the product's access rules.
pub enum Permission {
    Client,
    Host,
    Admin,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the session to a user row and enforces the given permissions.
    ///
    /// Passing an empty permission slice only requires the caller to be
    /// authenticated.
    ///
    /// # Returns
    /// - `Ok(Model)` - The authenticated user satisfying every permission
    /// - `Err(AuthError::UserNotInSession)` - No user id in the session
    /// - `Err(AuthError::UserNotInDatabase)` - Session references a deleted user
    /// - `Err(AuthError::AccessDenied)` - A required role is missing
    pub async fn require(
        &self,
        permissions: &[Permission],
    ) -> Result<entity::user::Model, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Client => {
                    if user.role != UserRole::Client {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "client role required".to_string(),
                        )
                        .into());
                    }
                }
                Permission::Host => {
                    if user.role != UserRole::Host {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "host role required".to_string(),
                        )
                        .into());
                    }
                }
                Permission::Admin => {
                    if user.role != UserRole::Admin {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "admin role required".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
