pub mod prelude;

pub mod notification;
pub mod publication_request;
pub mod reservation;
pub mod terrace;
pub mod user;
pub mod verification_document;
