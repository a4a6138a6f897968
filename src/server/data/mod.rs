//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models and take parameter models
//! from the business logic layer. All database queries, inserts, updates, and deletes are
//! performed through these repositories.

pub mod notification;
pub mod publication_request;
pub mod reservation;
pub mod terrace;
pub mod user;
pub mod verification_document;
