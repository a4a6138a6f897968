pub use super::notification::Entity as Notification;
pub use super::publication_request::Entity as PublicationRequest;
pub use super::reservation::Entity as Reservation;
pub use super::terrace::Entity as Terrace;
pub use super::user::Entity as User;
pub use super::verification_document::Entity as VerificationDocument;
