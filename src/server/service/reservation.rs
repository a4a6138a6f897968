//! Reservation lifecycle service.
//!
//! Owns the reservation state machine: pending is the only entry state,
//! `cancelled` and `completed` are terminal, and every transition is written
//! as a compare-and-set against the expected current status so concurrent
//! decisions cannot both win. The loser of a race re-reads the row and
//! reports the refusal the caller would have seen had it arrived second.

use sea_orm::DatabaseConnection;

use crate::{
    model::reservation::CreateReservationDto,
    server::{
        data::{reservation::ReservationRepository, terrace::TerraceRepository},
        error::AppError,
        model::reservation::CreateReservationParams,
        service::notification::NotificationService,
        util::parse::{non_empty, parse_reservation_date},
    },
};

use entity::reservation::ReservationStatus;

/// Fallback event type when the caller does not name one. Shared with the
/// offline reconciler so both paths normalize identically.
pub(crate) const DEFAULT_EVENT_TYPE: &str = "Cumpleaños";

/// Service providing business logic for the reservation lifecycle.
pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationService<'a> {
    /// Creates a new ReservationService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ReservationService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a reservation or visit request for the authenticated client.
    ///
    /// The venue reference must resolve against the published catalog; the
    /// stored display name is snapshotted from the catalog row, not from the
    /// payload. The date falls back to today when absent or unparseable, and
    /// the status always starts at `pending` no matter what the caller sent.
    /// The terrace owner is notified; a failed notification is logged and
    /// never fails the booking.
    ///
    /// # Arguments
    /// - `client_id` - The authenticated client's id
    /// - `payload` - Reservation data from the request body
    ///
    /// # Returns
    /// - `Ok(Model)` - The created reservation
    /// - `Err(AppError::NotFound)` - The venue reference names no terrace
    /// - `Err(AppError::BadRequest)` - Guest count or price out of range
    pub async fn create(
        &self,
        client_id: i32,
        payload: CreateReservationDto,
    ) -> Result<entity::reservation::Model, AppError> {
        let reservation_repo = ReservationRepository::new(self.db);
        let terrace_repo = TerraceRepository::new(self.db);

        let terrace = terrace_repo
            .find_by_ref(&payload.venue_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Terraza no encontrada".to_string()))?;

        let guests = payload.guests.unwrap_or(1);
        if guests < 1 {
            return Err(AppError::BadRequest(
                "El número de invitados debe ser mayor a 0".to_string(),
            ));
        }

        let total_price = payload.total_price.unwrap_or(0.0);
        if total_price < 0.0 {
            return Err(AppError::BadRequest(
                "El precio no puede ser negativo".to_string(),
            ));
        }

        let reservation = reservation_repo
            .create(CreateReservationParams {
                client_id,
                terrace_id: Some(terrace.id),
                terrace_ref: payload.venue_id,
                terrace_name: terrace.name.clone(),
                reservation_date: parse_reservation_date(payload.date.as_deref()),
                start_time: payload.start_time,
                end_time: payload.end_time,
                event_type: non_empty(payload.event_type)
                    .unwrap_or_else(|| DEFAULT_EVENT_TYPE.to_string()),
                comments: payload.comments,
                guests,
                is_visit: payload.is_visit,
                total_price,
                origin_offline: false,
                client_ref: None,
                sync_log: None,
            })
            .await?;

        if let Err(err) = NotificationService::new(self.db)
            .notify_reservation_created(terrace.owner_id, &reservation)
            .await
        {
            tracing::warn!(
                "Failed to notify owner {} of reservation {}: {}",
                terrace.owner_id,
                reservation.id,
                err
            );
        }

        Ok(reservation)
    }

    /// Lists the authenticated client's reservations, newest first.
    pub async fn list_mine(
        &self,
        client_id: i32,
    ) -> Result<Vec<entity::reservation::Model>, AppError> {
        let reservation_repo = ReservationRepository::new(self.db);

        let reservations = reservation_repo.get_by_client(client_id).await?;

        Ok(reservations)
    }

    /// Cancels one of the caller's pending reservations.
    ///
    /// Only the owning client may cancel, and only from `pending`: confirmed
    /// bookings require host-side rejection, and the terminal states refuse
    /// outright. The write is a compare-and-set on `pending`; when it matches
    /// nothing the row is re-read and the refusal reflects whatever status
    /// won the race.
    ///
    /// # Arguments
    /// - `client_id` - The authenticated client's id
    /// - `reservation_id` - The reservation to cancel
    ///
    /// # Returns
    /// - `Ok(Model)` - The reservation, now `cancelled`
    /// - `Err(AppError::NotFound)` - Unknown reservation id
    /// - `Err(AppError::Forbidden)` - The reservation belongs to someone else
    /// - `Err(AppError::InvalidTransition)` - The current status refuses cancellation
    pub async fn cancel(
        &self,
        client_id: i32,
        reservation_id: i32,
    ) -> Result<entity::reservation::Model, AppError> {
        let reservation_repo = ReservationRepository::new(self.db);

        let mut reservation = reservation_repo
            .get_by_id(reservation_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva no encontrada".to_string()))?;

        if reservation.client_id != client_id {
            return Err(AppError::Forbidden(
                "No tienes permiso para cancelar esta reserva".to_string(),
            ));
        }

        if let Some(refusal) = Self::cancel_refusal(reservation.status) {
            return Err(refusal);
        }

        let rows = reservation_repo
            .update_status(
                reservation_id,
                &[ReservationStatus::Pending],
                ReservationStatus::Cancelled,
            )
            .await?;

        if rows == 0 {
            return Err(self.transition_race_refusal(reservation_id, Self::cancel_refusal).await?);
        }

        reservation.status = ReservationStatus::Cancelled;

        Ok(reservation)
    }

    /// Confirms a pending reservation on one of the host's own terraces.
    ///
    /// The acting host must own the reservation's resolved terrace; offline
    /// records whose venue never resolved have no owner and are not
    /// actionable here. The client is notified of the confirmation.
    ///
    /// # Arguments
    /// - `host_id` - The authenticated host's id
    /// - `reservation_id` - The reservation to confirm
    ///
    /// # Returns
    /// - `Ok(Model)` - The reservation, now `confirmed`
    /// - `Err(AppError::NotFound)` - Unknown reservation id
    /// - `Err(AppError::Forbidden)` - The terrace is not the caller's
    /// - `Err(AppError::InvalidTransition)` - The current status refuses confirmation
    pub async fn approve(
        &self,
        host_id: i32,
        reservation_id: i32,
    ) -> Result<entity::reservation::Model, AppError> {
        let reservation_repo = ReservationRepository::new(self.db);

        let mut reservation = reservation_repo
            .get_by_id(reservation_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva no encontrada".to_string()))?;

        self.require_owned_terrace(host_id, &reservation).await?;

        if let Some(refusal) = Self::approve_refusal(reservation.status) {
            return Err(refusal);
        }

        let rows = reservation_repo
            .update_status(
                reservation_id,
                &[ReservationStatus::Pending],
                ReservationStatus::Confirmed,
            )
            .await?;

        if rows == 0 {
            return Err(self
                .transition_race_refusal(reservation_id, Self::approve_refusal)
                .await?);
        }

        reservation.status = ReservationStatus::Confirmed;

        self.notify_decision(&reservation, true).await;

        Ok(reservation)
    }

    /// Rejects a reservation on one of the host's own terraces.
    ///
    /// Legal from both `pending` and `confirmed`; rejection and client
    /// cancellation collapse into the same `cancelled` terminal state. The
    /// client is notified.
    ///
    /// # Arguments
    /// - `host_id` - The authenticated host's id
    /// - `reservation_id` - The reservation to reject
    ///
    /// # Returns
    /// - `Ok(Model)` - The reservation, now `cancelled`
    /// - `Err(AppError::NotFound)` - Unknown reservation id
    /// - `Err(AppError::Forbidden)` - The terrace is not the caller's
    /// - `Err(AppError::InvalidTransition)` - The reservation is already terminal
    pub async fn reject(
        &self,
        host_id: i32,
        reservation_id: i32,
    ) -> Result<entity::reservation::Model, AppError> {
        let reservation_repo = ReservationRepository::new(self.db);

        let mut reservation = reservation_repo
            .get_by_id(reservation_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva no encontrada".to_string()))?;

        self.require_owned_terrace(host_id, &reservation).await?;

        if let Some(refusal) = Self::reject_refusal(reservation.status) {
            return Err(refusal);
        }

        let rows = reservation_repo
            .update_status(
                reservation_id,
                &[ReservationStatus::Pending, ReservationStatus::Confirmed],
                ReservationStatus::Cancelled,
            )
            .await?;

        if rows == 0 {
            return Err(self.transition_race_refusal(reservation_id, Self::reject_refusal).await?);
        }

        reservation.status = ReservationStatus::Cancelled;

        self.notify_decision(&reservation, false).await;

        Ok(reservation)
    }

    /// Lists reservations on the host's terraces, newest first, with the
    /// booking client attached.
    pub async fn list_for_host(
        &self,
        host_id: i32,
    ) -> Result<Vec<(entity::reservation::Model, Option<entity::user::Model>)>, AppError> {
        let reservation_repo = ReservationRepository::new(self.db);

        let reservations = reservation_repo.get_by_owner(host_id).await?;

        Ok(reservations)
    }

    /// Checks that the acting host owns the reservation's resolved terrace.
    ///
    /// Records whose venue reference never resolved have no owner to
    /// authorize against, so nobody passes this check for them.
    async fn require_owned_terrace(
        &self,
        host_id: i32,
        reservation: &entity::reservation::Model,
    ) -> Result<(), AppError> {
        let terrace_repo = TerraceRepository::new(self.db);

        let owned = match reservation.terrace_id {
            Some(terrace_id) => terrace_repo
                .get_by_id(terrace_id)
                .await?
                .map(|(terrace, _)| terrace.owner_id == host_id)
                .unwrap_or(false),
            None => false,
        };

        if !owned {
            return Err(AppError::Forbidden(
                "No tienes permiso para gestionar esta reserva".to_string(),
            ));
        }

        Ok(())
    }

    /// Re-reads a reservation after a compare-and-set matched no rows and
    /// derives the refusal for the status that won the race.
    async fn transition_race_refusal(
        &self,
        reservation_id: i32,
        refusal: fn(ReservationStatus) -> Option<AppError>,
    ) -> Result<AppError, AppError> {
        let reservation_repo = ReservationRepository::new(self.db);

        let current = reservation_repo
            .get_by_id(reservation_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva no encontrada".to_string()))?;

        Ok(refusal(current.status).unwrap_or_else(|| {
            // The swap missed but the status still permits the transition;
            // statuses never revert, so this indicates a bug.
            AppError::InternalError(format!(
                "reservation {} transition matched no rows at status {}",
                reservation_id,
                current.status.as_str()
            ))
        }))
    }

    /// Notifies the booking client of a host decision, logging failures
    /// instead of failing the transition that already happened.
    async fn notify_decision(&self, reservation: &entity::reservation::Model, confirmed: bool) {
        if let Err(err) = NotificationService::new(self.db)
            .notify_reservation_decision(reservation, confirmed)
            .await
        {
            tracing::warn!(
                "Failed to notify client {} about reservation {}: {}",
                reservation.client_id,
                reservation.id,
                err
            );
        }
    }

    /// Refusal for a client cancel against the given status, if any.
    fn cancel_refusal(status: ReservationStatus) -> Option<AppError> {
        match status {
            ReservationStatus::Pending => None,
            ReservationStatus::Cancelled => Some(AppError::InvalidTransition(
                "La reserva ya está cancelada".to_string(),
            )),
            ReservationStatus::Completed => Some(AppError::InvalidTransition(
                "No puedes cancelar una reserva completada".to_string(),
            )),
            ReservationStatus::Confirmed => Some(AppError::InvalidTransition(
                "Reserva confirmada. Contacta al anfitrión para cancelar".to_string(),
            )),
        }
    }

    /// Refusal for a host approve against the given status, if any.
    fn approve_refusal(status: ReservationStatus) -> Option<AppError> {
        match status {
            ReservationStatus::Pending => None,
            ReservationStatus::Confirmed => Some(AppError::InvalidTransition(
                "La reserva ya está confirmada".to_string(),
            )),
            ReservationStatus::Cancelled => Some(AppError::InvalidTransition(
                "No puedes confirmar una reserva cancelada".to_string(),
            )),
            ReservationStatus::Completed => Some(AppError::InvalidTransition(
                "No puedes confirmar una reserva completada".to_string(),
            )),
        }
    }

    /// Refusal for a host reject against the given status, if any.
    fn reject_refusal(status: ReservationStatus) -> Option<AppError> {
        match status {
            ReservationStatus::Pending | ReservationStatus::Confirmed => None,
            ReservationStatus::Cancelled => Some(AppError::InvalidTransition(
                "La reserva ya está cancelada".to_string(),
            )),
            ReservationStatus::Completed => Some(AppError::InvalidTransition(
                "No puedes rechazar una reserva completada".to_string(),
            )),
        }
    }
}
