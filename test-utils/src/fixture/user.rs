//! User fixtures for creating in-memory test data.
//!
//! Provides fixture functions for creating user entity models without database insertion.
//! These are useful for unit testing, mocking, and providing consistent default values.

use chrono::Utc;
use entity::user::{self, UserRole};

/// Default test user name.
pub const DEFAULT_NAME: &str = "Test User";

/// Default test user email.
pub const DEFAULT_EMAIL: &str = "test.user@example.com";

/// Creates a client user entity model with default values.
///
/// This function creates an in-memory user entity without inserting into the database.
/// Use this for unit tests and mocking repository responses.
///
/// # Default Values
/// - id: `1`
/// - name: `"Test User"`
/// - email: `"test.user@example.com"`
/// - role: `UserRole::Client`
/// - phone: `None`
///
/// # Returns
/// - `user::Model` - In-memory user entity
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let user = fixture::user::entity();
/// assert_eq!(user.name, "Test User");
/// ```
pub fn entity() -> user::Model {
    let now = Utc::now();
    user::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        email: DEFAULT_EMAIL.to_string(),
        password_hash: "not-a-real-hash".to_string(),
        phone: None,
        role: UserRole::Client,
        created_at: now,
        updated_at: now,
    }
}

/// Creates a user entity model with a specific id and role.
///
/// # Arguments
/// - `id` - User ID for the model
/// - `role` - Role for the model
///
/// # Returns
/// - `user::Model` - In-memory user entity
pub fn entity_with_role(id: i32, role: UserRole) -> user::Model {
    user::Model {
        id,
        role,
        ..entity()
    }
}
