use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::publication_request::{ReviewPublicationParams, SubmitPublicationParams};
use entity::publication_request::PublicationStatus;

pub struct PublicationRequestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PublicationRequestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new listing request in `pending` status.
    pub async fn create(
        &self,
        params: SubmitPublicationParams,
    ) -> Result<entity::publication_request::Model, DbErr> {
        entity::publication_request::ActiveModel {
            owner_id: ActiveValue::Set(params.owner_id),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            capacity: ActiveValue::Set(params.capacity),
            location: ActiveValue::Set(params.location),
            price: ActiveValue::Set(params.price),
            contact_phone: ActiveValue::Set(params.contact_phone),
            contact_email: ActiveValue::Set(params.contact_email),
            amenities: ActiveValue::Set(params.amenities),
            rules: ActiveValue::Set(params.rules),
            status: ActiveValue::Set(PublicationStatus::Pending),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::publication_request::Model>, DbErr> {
        entity::prelude::PublicationRequest::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Lists a host's own requests, newest first.
    pub async fn get_by_owner(
        &self,
        owner_id: i32,
    ) -> Result<Vec<entity::publication_request::Model>, DbErr> {
        entity::prelude::PublicationRequest::find()
            .filter(entity::publication_request::Column::OwnerId.eq(owner_id))
            .order_by_desc(entity::publication_request::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Lists requests for the admin queue, optionally filtered by status,
    /// newest first.
    pub async fn get_all(
        &self,
        status: Option<PublicationStatus>,
    ) -> Result<Vec<entity::publication_request::Model>, DbErr> {
        let mut query = entity::prelude::PublicationRequest::find();

        if let Some(status) = status {
            query = query.filter(entity::publication_request::Column::Status.eq(status));
        }

        query
            .order_by_desc(entity::publication_request::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Moves a request out of `pending` into a review verdict.
    ///
    /// The status filter makes the update a compare-and-set: a request that
    /// was already reviewed (or never existed) matches zero rows, so two
    /// admins racing on the same request cannot both win.
    ///
    /// # Returns
    /// - `Ok(rows_affected)` - 1 when the verdict was recorded, 0 otherwise
    /// - `Err(DbErr)` - Database error during update
    pub async fn review(
        &self,
        id: i32,
        verdict: PublicationStatus,
        params: ReviewPublicationParams,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::PublicationRequest::update_many()
            .filter(entity::publication_request::Column::Id.eq(id))
            .filter(entity::publication_request::Column::Status.eq(PublicationStatus::Pending))
            .col_expr(
                entity::publication_request::Column::Status,
                sea_orm::sea_query::Expr::value(verdict),
            )
            .col_expr(
                entity::publication_request::Column::AdminNotes,
                sea_orm::sea_query::Expr::value(params.admin_notes),
            )
            .col_expr(
                entity::publication_request::Column::ReviewedBy,
                sea_orm::sea_query::Expr::value(params.reviewer_id),
            )
            .col_expr(
                entity::publication_request::Column::ReviewedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
