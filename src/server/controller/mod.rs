//! HTTP request handlers for the API surface.
//!
//! Controllers are the outermost application layer: they enforce access
//! control through `AuthGuard`, convert between wire DTOs and domain types,
//! call into the service layer, and map results onto status codes and the
//! `{success, message?, data?}` response envelope the clients expect.
//! Handlers hold no business logic of their own.

pub mod auth;
pub mod health;
pub mod notification;
pub mod publication_request;
pub mod reservation;
pub mod terrace;
pub mod user;
pub mod verification;
