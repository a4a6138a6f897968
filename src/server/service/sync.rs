//! Offline bulk-sync reconciler.
//!
//! Replays batches of reservations an offline client queued locally. Each
//! record is processed independently, so one bad element costs only itself
//! and the reply counts what survived. Records carrying the client's
//! temporary id are upserted on the (client, temporary id) key, which makes
//! a retried batch converge on the same server rows instead of duplicating
//! them.

use sea_orm::DatabaseConnection;

use crate::{
    model::sync::{BulkSyncDto, BulkSyncResultDto, OfflineReservationDto, SyncMappingDto},
    server::{
        data::{reservation::ReservationRepository, terrace::TerraceRepository},
        error::AppError,
        model::reservation::CreateReservationParams,
        service::reservation::DEFAULT_EVENT_TYPE,
        util::parse::{non_empty, parse_reservation_date},
    },
};

/// Venue reference stored when the offline record never captured one.
const DEFAULT_VENUE_REF: &str = "unknown";
/// Display name stored when neither the catalog nor the record names the venue.
const DEFAULT_VENUE_NAME: &str = "Terraza sin nombre";
/// Booking window applied when the offline record kept no times.
const DEFAULT_START_TIME: &str = "10:00";
const DEFAULT_END_TIME: &str = "12:00";

/// Service reconciling offline reservation batches into the server store.
pub struct SyncService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SyncService<'a> {
    /// Creates a new SyncService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `SyncService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Reconciles a batch of offline reservations for the authenticated client.
    ///
    /// The record list must be an array; anything else rejects the whole
    /// request before touching the database. Individual records are then
    /// normalized with permissive defaults and persisted one by one: a record
    /// that fails to parse, fails validation, or errors during persistence is
    /// logged and skipped without disturbing the rest of the batch. Ownership
    /// always goes to the caller; identity embedded in the payload is kept
    /// only in the sync log.
    ///
    /// # Arguments
    /// - `client_id` - The authenticated client's id
    /// - `payload` - The raw batch from the request body
    ///
    /// # Returns
    /// - `Ok(BulkSyncResultDto)` - Counts and temporary-id mapping for the batch
    /// - `Err(AppError::BadRequest)` - `reservations` is not an array
    pub async fn bulk_sync(
        &self,
        client_id: i32,
        payload: BulkSyncDto,
    ) -> Result<BulkSyncResultDto, AppError> {
        let Some(records) = payload.reservations.as_array() else {
            return Err(AppError::BadRequest(
                "El campo reservations debe ser un arreglo".to_string(),
            ));
        };

        let mut saved_count = 0;
        let mut mapping = Vec::new();

        for (index, raw) in records.iter().enumerate() {
            let record = match serde_json::from_value::<OfflineReservationDto>(raw.clone()) {
                Ok(record) => record,
                Err(err) => {
                    tracing::warn!("Skipping malformed offline record {}: {}", index, err);
                    continue;
                }
            };

            match self.reconcile_record(client_id, record).await {
                Ok((reservation, client_ref)) => {
                    saved_count += 1;

                    if let Some(client_ref) = client_ref {
                        mapping.push(SyncMappingDto {
                            client_id: client_ref,
                            server_id: reservation.id,
                        });
                    }
                }
                Err(err) => {
                    tracing::warn!("Skipping offline record {}: {}", index, err);
                }
            }
        }

        Ok(BulkSyncResultDto {
            saved_count,
            received_count: records.len() as u64,
            mapping,
        })
    }

    /// Normalizes and persists a single offline record.
    ///
    /// Returns the stored reservation together with the record's temporary id
    /// when it carried one. Records with a temporary id go through the
    /// idempotent upsert; the rest are plain inserts.
    async fn reconcile_record(
        &self,
        client_id: i32,
        record: OfflineReservationDto,
    ) -> Result<(entity::reservation::Model, Option<String>), AppError> {
        let reservation_repo = ReservationRepository::new(self.db);
        let terrace_repo = TerraceRepository::new(self.db);

        let guests = record.guests.unwrap_or(1);
        if guests < 1 {
            return Err(AppError::BadRequest(
                "El número de invitados debe ser mayor a 0".to_string(),
            ));
        }

        let total_price = record.total_price.unwrap_or(0.0);
        if total_price < 0.0 {
            return Err(AppError::BadRequest(
                "El precio no puede ser negativo".to_string(),
            ));
        }

        let venue_ref = non_empty(record.venue_id).unwrap_or_else(|| DEFAULT_VENUE_REF.to_string());
        let terrace = terrace_repo.find_by_ref(&venue_ref).await?;

        // Catalog name wins over whatever the offline client stored.
        let terrace_name = terrace
            .as_ref()
            .map(|terrace| terrace.name.clone())
            .or_else(|| non_empty(record.venue_name))
            .unwrap_or_else(|| DEFAULT_VENUE_NAME.to_string());

        let client_ref = non_empty(record.id);
        let sync_log = Self::sync_log_entry(&record.client);

        let params = CreateReservationParams {
            client_id,
            terrace_id: terrace.map(|terrace| terrace.id),
            terrace_ref: venue_ref,
            terrace_name,
            reservation_date: parse_reservation_date(record.date.as_deref()),
            start_time: non_empty(record.start_time)
                .unwrap_or_else(|| DEFAULT_START_TIME.to_string()),
            end_time: non_empty(record.end_time).unwrap_or_else(|| DEFAULT_END_TIME.to_string()),
            event_type: non_empty(record.event_type)
                .unwrap_or_else(|| DEFAULT_EVENT_TYPE.to_string()),
            comments: non_empty(record.comments),
            guests,
            is_visit: record.is_visit.unwrap_or(false),
            total_price,
            origin_offline: true,
            client_ref: client_ref.clone(),
            sync_log: Some(sync_log),
        };

        let reservation = match &client_ref {
            Some(temp_id) => {
                let (reservation, inserted) = reservation_repo.upsert_synced(params).await?;

                if !inserted {
                    tracing::debug!(
                        "Offline record {} already synced as reservation {}",
                        temp_id,
                        reservation.id
                    );
                }

                reservation
            }
            None => reservation_repo.create(params).await?,
        };

        Ok((reservation, client_ref))
    }

    /// Builds the traceability note stored with a reconciled record.
    ///
    /// Identity embedded by the offline client never decides ownership, but
    /// it is kept here for support to untangle a disputed batch.
    fn sync_log_entry(embedded_client: &Option<serde_json::Value>) -> String {
        match embedded_client
            .as_ref()
            .filter(|identity| !identity.is_null())
        {
            Some(identity) => format!(
                "Synced from offline batch; embedded client identity: {}",
                identity
            ),
            None => "Synced from offline batch".to_string(),
        }
    }
}
