//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls and notification fan-out
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **State Transitions**: Guarding lifecycle changes with compare-and-set writes

pub mod auth;
pub mod notification;
pub mod publication;
pub mod reservation;
pub mod sync;
pub mod terrace;
pub mod verification;
