use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::reservation::CreateReservationParams;
use entity::reservation::ReservationStatus;

pub struct ReservationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new reservation.
    ///
    /// Status always starts at `pending`; any status carried by the caller's
    /// payload was discarded before the params were built.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created reservation
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        params: CreateReservationParams,
    ) -> Result<entity::reservation::Model, DbErr> {
        let now = Utc::now();

        entity::reservation::ActiveModel {
            client_id: ActiveValue::Set(params.client_id),
            terrace_id: ActiveValue::Set(params.terrace_id),
            terrace_ref: ActiveValue::Set(params.terrace_ref),
            terrace_name: ActiveValue::Set(params.terrace_name),
            reservation_date: ActiveValue::Set(params.reservation_date),
            start_time: ActiveValue::Set(params.start_time),
            end_time: ActiveValue::Set(params.end_time),
            event_type: ActiveValue::Set(params.event_type),
            comments: ActiveValue::Set(params.comments),
            guests: ActiveValue::Set(params.guests),
            is_visit: ActiveValue::Set(params.is_visit),
            status: ActiveValue::Set(ReservationStatus::Pending),
            total_price: ActiveValue::Set(params.total_price),
            origin_offline: ActiveValue::Set(params.origin_offline),
            client_ref: ActiveValue::Set(params.client_ref),
            sync_log: ActiveValue::Set(params.sync_log),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Inserts an offline-originated reservation, or returns the row a
    /// previous sync of the same record already created.
    ///
    /// The unique `(client_id, client_ref)` index is the idempotency key: the
    /// insert runs with `ON CONFLICT DO NOTHING`, and when the driver reports
    /// that nothing was inserted the existing row is fetched instead. This
    /// keeps a retried batch from duplicating reservations.
    ///
    /// # Returns
    /// - `Ok((Model, true))` - Fresh row inserted by this call
    /// - `Ok((Model, false))` - Row from an earlier sync of the same record
    /// - `Err(DbErr)` - Database error during insert or re-read
    pub async fn upsert_synced(
        &self,
        params: CreateReservationParams,
    ) -> Result<(entity::reservation::Model, bool), DbErr> {
        let client_id = params.client_id;
        let client_ref = params.client_ref.clone();
        let now = Utc::now();

        let insert = entity::prelude::Reservation::insert(entity::reservation::ActiveModel {
            client_id: ActiveValue::Set(params.client_id),
            terrace_id: ActiveValue::Set(params.terrace_id),
            terrace_ref: ActiveValue::Set(params.terrace_ref),
            terrace_name: ActiveValue::Set(params.terrace_name),
            reservation_date: ActiveValue::Set(params.reservation_date),
            start_time: ActiveValue::Set(params.start_time),
            end_time: ActiveValue::Set(params.end_time),
            event_type: ActiveValue::Set(params.event_type),
            comments: ActiveValue::Set(params.comments),
            guests: ActiveValue::Set(params.guests),
            is_visit: ActiveValue::Set(params.is_visit),
            status: ActiveValue::Set(ReservationStatus::Pending),
            total_price: ActiveValue::Set(params.total_price),
            origin_offline: ActiveValue::Set(true),
            client_ref: ActiveValue::Set(params.client_ref),
            sync_log: ActiveValue::Set(params.sync_log),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([
                entity::reservation::Column::ClientId,
                entity::reservation::Column::ClientRef,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await;

        match insert {
            Ok(model) => Ok((model, true)),
            Err(DbErr::RecordNotInserted) => {
                let existing = self
                    .find_by_sync_key(client_id, client_ref.as_deref().unwrap_or_default())
                    .await?
                    .ok_or(DbErr::RecordNotFound(
                        "synced reservation vanished between insert and re-read".to_string(),
                    ))?;

                Ok((existing, false))
            }
            Err(err) => Err(err),
        }
    }

    /// Looks up a reservation by its bulk-sync idempotency key.
    pub async fn find_by_sync_key(
        &self,
        client_id: i32,
        client_ref: &str,
    ) -> Result<Option<entity::reservation::Model>, DbErr> {
        entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::ClientId.eq(client_id))
            .filter(entity::reservation::Column::ClientRef.eq(client_ref))
            .one(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::reservation::Model>, DbErr> {
        entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Lists a client's own reservations, newest first.
    pub async fn get_by_client(
        &self,
        client_id: i32,
    ) -> Result<Vec<entity::reservation::Model>, DbErr> {
        entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::ClientId.eq(client_id))
            .order_by_desc(entity::reservation::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Lists reservations for the terraces a host owns, newest first, with
    /// the booking client attached for contact details.
    ///
    /// The inner join on the terrace relation scopes the result to the host's
    /// venues; reservations whose venue reference never resolved have no
    /// terrace row and are invisible here.
    pub async fn get_by_owner(
        &self,
        owner_id: i32,
    ) -> Result<Vec<(entity::reservation::Model, Option<entity::user::Model>)>, DbErr> {
        entity::prelude::Reservation::find()
            .join(
                JoinType::InnerJoin,
                entity::reservation::Relation::Terrace.def(),
            )
            .filter(entity::terrace::Column::OwnerId.eq(owner_id))
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::reservation::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Moves a reservation between statuses with a compare-and-set.
    ///
    /// The update only matches when the current status is one of `expected`,
    /// so two racing transitions cannot both win; the loser matches zero rows
    /// and the caller re-reads to find out why.
    ///
    /// # Returns
    /// - `Ok(rows_affected)` - 1 when the transition applied, 0 otherwise
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_status(
        &self,
        id: i32,
        expected: &[ReservationStatus],
        to: ReservationStatus,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Reservation::update_many()
            .filter(entity::reservation::Column::Id.eq(id))
            .filter(entity::reservation::Column::Status.is_in(expected.iter().copied()))
            .col_expr(
                entity::reservation::Column::Status,
                sea_orm::sea_query::Expr::value(to),
            )
            .col_expr(
                entity::reservation::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
