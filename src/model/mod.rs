//! Wire DTOs shared by the API surface.
//!
//! This module contains the serde types that cross the HTTP boundary: request
//! bodies, response payloads, and the response envelope every endpoint wraps
//! its payload in. Field names are camelCase on the wire; legacy Spanish field
//! names from the first-generation mobile client are accepted on input through
//! serde aliases. Conversion to and from server-side domain models happens in
//! the controller layer.

pub mod api;
pub mod notification;
pub mod publication;
pub mod reservation;
pub mod sync;
pub mod terrace;
pub mod user;
pub mod verification;
