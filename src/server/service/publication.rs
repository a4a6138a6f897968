//! Terrace publication workflow service.
//!
//! Hosts submit listing requests, admins review them, and an approval
//! materializes the listing into the public catalog. The review itself is a
//! compare-and-set on `pending`, so two admins racing on the same request
//! cannot both record a verdict; the catalog row is created after the
//! verdict lands.

use sea_orm::DatabaseConnection;

use crate::{
    model::publication::{ReviewPublicationDto, SubmitPublicationDto},
    server::{
        data::{publication_request::PublicationRequestRepository, terrace::TerraceRepository},
        error::AppError,
        model::publication_request::{ReviewPublicationParams, SubmitPublicationParams},
        service::notification::NotificationService,
        util::parse::non_empty,
    },
};

use entity::publication_request::PublicationStatus;

/// Service providing business logic for the terrace publication workflow.
pub struct PublicationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PublicationService<'a> {
    /// Creates a new PublicationService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PublicationService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Submits a terrace listing for admin review.
    ///
    /// Every required field missing from the payload is reported in one
    /// error rather than one at a time. Strings are trimmed, the contact
    /// email is stored lowercase, and amenities survive only as a JSON
    /// array; anything else collapses to empty.
    ///
    /// # Arguments
    /// - `owner_id` - The authenticated host's id
    /// - `payload` - Listing data from the request body
    ///
    /// # Returns
    /// - `Ok(Model)` - The created request, in `pending` status
    /// - `Err(AppError::BadRequest)` - Missing fields or out-of-range numbers
    pub async fn submit(
        &self,
        owner_id: i32,
        payload: SubmitPublicationDto,
    ) -> Result<entity::publication_request::Model, AppError> {
        let publication_repo = PublicationRequestRepository::new(self.db);

        let mut missing = Vec::new();

        let name = require(non_empty(payload.name), "name", &mut missing);
        let description = require(non_empty(payload.description), "description", &mut missing);
        let capacity = require(payload.capacity, "capacity", &mut missing);
        let location = require(non_empty(payload.location), "location", &mut missing);
        let price = require(payload.price, "price", &mut missing);
        let contact_phone = require(non_empty(payload.contact_phone), "contactPhone", &mut missing);
        let contact_email = require(non_empty(payload.contact_email), "contactEmail", &mut missing);

        let (
            Some(name),
            Some(description),
            Some(capacity),
            Some(location),
            Some(price),
            Some(contact_phone),
            Some(contact_email),
        ) = (name, description, capacity, location, price, contact_phone, contact_email)
        else {
            return Err(AppError::BadRequest(format!(
                "Faltan campos requeridos: {}",
                missing.join(", ")
            )));
        };

        if capacity <= 0 {
            return Err(AppError::BadRequest(
                "La capacidad debe ser mayor a 0".to_string(),
            ));
        }

        if price <= 0.0 {
            return Err(AppError::BadRequest(
                "El precio debe ser mayor a 0".to_string(),
            ));
        }

        let amenities = payload
            .amenities
            .filter(|value| value.is_array())
            .unwrap_or_else(|| serde_json::json!([]));

        let request = publication_repo
            .create(SubmitPublicationParams {
                owner_id,
                name,
                description,
                capacity,
                location,
                price,
                contact_phone,
                contact_email: contact_email.to_lowercase(),
                amenities,
                rules: non_empty(payload.rules),
            })
            .await?;

        Ok(request)
    }

    /// Lists the authenticated host's own requests, newest first.
    pub async fn list_mine(
        &self,
        owner_id: i32,
    ) -> Result<Vec<entity::publication_request::Model>, AppError> {
        let publication_repo = PublicationRequestRepository::new(self.db);

        let requests = publication_repo.get_by_owner(owner_id).await?;

        Ok(requests)
    }

    /// Lists requests for the admin review queue, newest first.
    ///
    /// # Arguments
    /// - `status_filter` - Optional raw status string to filter on
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Matching requests
    /// - `Err(AppError::BadRequest)` - The filter names no known status
    pub async fn list(
        &self,
        status_filter: Option<String>,
    ) -> Result<Vec<entity::publication_request::Model>, AppError> {
        let publication_repo = PublicationRequestRepository::new(self.db);

        let status = match status_filter {
            Some(raw) => Some(PublicationStatus::parse(&raw).ok_or_else(|| {
                AppError::BadRequest("Estado inválido. Use: pending, approved, rejected".to_string())
            })?),
            None => None,
        };

        let requests = publication_repo.get_all(status).await?;

        Ok(requests)
    }

    /// Fetches a single request for the admin detail view.
    pub async fn get_by_id(
        &self,
        request_id: i32,
    ) -> Result<entity::publication_request::Model, AppError> {
        let publication_repo = PublicationRequestRepository::new(self.db);

        let request = publication_repo
            .get_by_id(request_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Solicitud no encontrada".to_string()))?;

        Ok(request)
    }

    /// Approves a pending request and publishes it to the catalog.
    ///
    /// The verdict is recorded first via the compare-and-set; only then is
    /// the catalog row created from the stamped request. A crash between the
    /// two leaves an approved request without a listing, which an admin can
    /// spot in the queue; the write order never publishes an unapproved one.
    /// The owner is notified; notification failures are logged and swallowed.
    ///
    /// # Arguments
    /// - `reviewer_id` - The authenticated admin's id
    /// - `request_id` - The request under review
    /// - `payload` - Optional review notes
    ///
    /// # Returns
    /// - `Ok(Model)` - The request with the verdict stamped
    /// - `Err(AppError::NotFound)` - Unknown request id
    /// - `Err(AppError::BadRequest)` - The request was already reviewed
    pub async fn approve(
        &self,
        reviewer_id: i32,
        request_id: i32,
        payload: ReviewPublicationDto,
    ) -> Result<entity::publication_request::Model, AppError> {
        let request = self
            .review(reviewer_id, request_id, PublicationStatus::Approved, payload)
            .await?;

        TerraceRepository::new(self.db)
            .create_from_request(&request)
            .await?;

        self.notify_owner(&request, true).await;

        Ok(request)
    }

    /// Rejects a pending request.
    ///
    /// Same compare-and-set guard as approval; no catalog row is involved.
    /// The owner is notified.
    pub async fn reject(
        &self,
        reviewer_id: i32,
        request_id: i32,
        payload: ReviewPublicationDto,
    ) -> Result<entity::publication_request::Model, AppError> {
        let request = self
            .review(reviewer_id, request_id, PublicationStatus::Rejected, payload)
            .await?;

        self.notify_owner(&request, false).await;

        Ok(request)
    }

    /// Records a review verdict and returns the freshly stamped request.
    ///
    /// Zero rows from the compare-and-set means the request is missing or no
    /// longer pending; the re-read decides which error the caller sees.
    async fn review(
        &self,
        reviewer_id: i32,
        request_id: i32,
        verdict: PublicationStatus,
        payload: ReviewPublicationDto,
    ) -> Result<entity::publication_request::Model, AppError> {
        let publication_repo = PublicationRequestRepository::new(self.db);

        let rows = publication_repo
            .review(
                request_id,
                verdict,
                ReviewPublicationParams {
                    reviewer_id,
                    admin_notes: non_empty(payload.admin_notes).unwrap_or_default(),
                },
            )
            .await?;

        let request = publication_repo
            .get_by_id(request_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Solicitud no encontrada".to_string()))?;

        if rows == 0 {
            return Err(AppError::BadRequest(
                "Solicitud no está pendiente".to_string(),
            ));
        }

        Ok(request)
    }

    /// Notifies the request owner of the review outcome, logging failures
    /// instead of failing the review that already happened.
    async fn notify_owner(&self, request: &entity::publication_request::Model, approved: bool) {
        if let Err(err) = NotificationService::new(self.db)
            .notify_publication_reviewed(request, approved)
            .await
        {
            tracing::warn!(
                "Failed to notify owner {} about publication request {}: {}",
                request.owner_id,
                request.id,
                err
            );
        }
    }
}

/// Records the field name when a required value is absent, passing the value
/// through either way.
fn require<T>(value: Option<T>, field: &'static str, missing: &mut Vec<&'static str>) -> Option<T> {
    if value.is_none() {
        missing.push(field);
    }

    value
}
