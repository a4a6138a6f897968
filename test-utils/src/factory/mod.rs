//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!
//!     // Create with all dependencies
//!     let (client, host, terrace, reservation) =
//!         factory::helpers::create_reservation_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use entity::user::UserRole;
//! use test_utils::factory;
//!
//! let host = factory::user::UserFactory::new(&db)
//!     .name("CustomHost")
//!     .role(UserRole::Host)
//!     .build()
//!     .await?;
//!
//! let reservation = factory::reservation::ReservationFactory::new(&db, host.id)
//!     .client_ref(Some("tmp-1".to_string()))
//!     .origin_offline(true)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `publication_request` - Create publication request entities
//! - `terrace` - Create approved terrace catalog entities
//! - `reservation` - Create reservation entities
//! - `notification` - Create notification entities
//! - `verification_document` - Create verification document entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod helpers;
pub mod notification;
pub mod publication_request;
pub mod reservation;
pub mod terrace;
pub mod user;
pub mod verification_document;

// Re-export commonly used factory functions for concise usage
pub use notification::create_notification;
pub use publication_request::create_publication_request;
pub use reservation::create_reservation;
pub use terrace::create_terrace;
pub use user::{create_user, create_user_with_role};
pub use verification_document::create_verification_document;
