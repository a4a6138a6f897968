//! Server-side domain models and parameter types.
//!
//! This module contains the parameter types passed between the service layer
//! and the repositories, plus small domain models that do not belong on the
//! wire. Wire DTOs are converted to parameter types at the controller or
//! service boundary; entity models convert to DTOs on the way out.

pub mod notification;
pub mod publication_request;
pub mod reservation;
pub mod user;
pub mod verification_document;
