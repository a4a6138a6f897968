//! Account service for registration, login, and profile management.
//!
//! Passwords are bcrypt-hashed here and never reach the data layer in plain
//! text. Emails are normalized to lowercase before storage and lookup so the
//! unique index cannot be dodged by case tricks.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::{LoginDto, RegisterDto, UpdateProfileDto, UserDto},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        model::user::{CreateUserParams, UpdateProfileParams},
    },
};

use entity::user::UserRole;

/// Service providing business logic for user accounts.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account.
    ///
    /// Name, email, and password are all required. The requested role is
    /// validated against the role enum and falls back to `client` when absent
    /// or unrecognized, matching the original signup contract.
    ///
    /// # Arguments
    /// - `payload` - Registration data from the request body
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created account, without the password hash
    /// - `Err(AppError::BadRequest)` - A required field is missing
    /// - `Err(AppError::AuthErr(EmailExists))` - The email already has an account
    /// - `Err(AppError::BcryptErr)` - Password hashing failed
    pub async fn register(&self, payload: RegisterDto) -> Result<UserDto, AppError> {
        let user_repo = UserRepository::new(self.db);

        let name = payload.name.trim();
        let email = payload.email.trim().to_lowercase();

        if name.is_empty() || email.is_empty() || payload.password.is_empty() {
            return Err(AppError::BadRequest(
                "Todos los campos son requeridos".to_string(),
            ));
        }

        if user_repo.find_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailExists.into());
        }

        let role = payload
            .role
            .as_deref()
            .and_then(UserRole::parse)
            .unwrap_or(UserRole::Client);

        let password_hash = bcrypt::hash(&payload.password, bcrypt::DEFAULT_COST)?;

        let user = user_repo
            .create(CreateUserParams {
                name: name.to_string(),
                email,
                password_hash,
                phone: payload.phone,
                role,
            })
            .await?;

        Ok(UserDto::from_entity(user))
    }

    /// Authenticates an account by email and password.
    ///
    /// An unknown email and a wrong password both produce the same
    /// `InvalidCredentials` error so the response never reveals which half
    /// was wrong.
    ///
    /// # Arguments
    /// - `payload` - Login credentials from the request body
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The authenticated account
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email or bad password
    pub async fn login(&self, payload: LoginDto) -> Result<UserDto, AppError> {
        let user_repo = UserRepository::new(self.db);

        let email = payload.email.trim().to_lowercase();

        let Some(user) = user_repo.find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !bcrypt::verify(&payload.password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(UserDto::from_entity(user))
    }

    /// Fetches the caller's own profile.
    ///
    /// # Arguments
    /// - `user_id` - The authenticated user's id
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The profile
    /// - `Err(AppError::NotFound)` - The account no longer exists
    pub async fn get_profile(&self, user_id: i32) -> Result<UserDto, AppError> {
        let user_repo = UserRepository::new(self.db);

        let user = user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        Ok(UserDto::from_entity(user))
    }

    /// Updates the caller's name, email, and optionally phone.
    ///
    /// An omitted phone leaves the stored number untouched. The new email is
    /// checked against every other account before the write so the uniqueness
    /// violation surfaces as a 409 instead of a database error.
    ///
    /// # Arguments
    /// - `user_id` - The authenticated user's id
    /// - `payload` - Profile fields from the request body
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The updated profile
    /// - `Err(AppError::BadRequest)` - Name or email is missing
    /// - `Err(AppError::AuthErr(EmailInUse))` - Another account holds the email
    /// - `Err(AppError::NotFound)` - The account no longer exists
    pub async fn update_profile(
        &self,
        user_id: i32,
        payload: UpdateProfileDto,
    ) -> Result<UserDto, AppError> {
        let user_repo = UserRepository::new(self.db);

        let name = payload.name.trim();
        let email = payload.email.trim().to_lowercase();

        if name.is_empty() || email.is_empty() {
            return Err(AppError::BadRequest(
                "Nombre y email son requeridos".to_string(),
            ));
        }

        if user_repo.email_taken_by_other(&email, user_id).await? {
            return Err(AuthError::EmailInUse.into());
        }

        let user = user_repo
            .update_profile(
                user_id,
                UpdateProfileParams {
                    name: name.to_string(),
                    email,
                    phone: payload.phone,
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        Ok(UserDto::from_entity(user))
    }

    /// Deletes the caller's account.
    ///
    /// Reservations, notifications, and documents owned by the account are
    /// removed by the cascading foreign keys.
    ///
    /// # Arguments
    /// - `user_id` - The authenticated user's id
    ///
    /// # Returns
    /// - `Ok(())` - Account deleted
    /// - `Err(AppError::NotFound)` - The account no longer exists
    pub async fn delete_profile(&self, user_id: i32) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        let deleted = user_repo.delete(user_id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound("Usuario no encontrado".to_string()));
        }

        Ok(())
    }
}
