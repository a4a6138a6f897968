use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

pub struct TerraceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TerraceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Publishes a catalog row from an approved publication request.
    ///
    /// Listing fields are copied verbatim from the request so later edits to
    /// the request never leak into the public catalog.
    ///
    /// # Returns
    /// - `Ok(Model)` - The published terrace
    /// - `Err(DbErr)` - Database error, including the unique request_id guard
    pub async fn create_from_request(
        &self,
        request: &entity::publication_request::Model,
    ) -> Result<entity::terrace::Model, DbErr> {
        entity::terrace::ActiveModel {
            request_id: ActiveValue::Set(request.id),
            owner_id: ActiveValue::Set(request.owner_id),
            name: ActiveValue::Set(request.name.clone()),
            description: ActiveValue::Set(request.description.clone()),
            capacity: ActiveValue::Set(request.capacity),
            location: ActiveValue::Set(request.location.clone()),
            price: ActiveValue::Set(request.price),
            contact_phone: ActiveValue::Set(request.contact_phone.clone()),
            contact_email: ActiveValue::Set(request.contact_email.clone()),
            amenities: ActiveValue::Set(request.amenities.clone()),
            rules: ActiveValue::Set(request.rules.clone()),
            published_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets the whole public catalog with owner rows, newest listing first.
    pub async fn get_all(
        &self,
    ) -> Result<Vec<(entity::terrace::Model, Option<entity::user::Model>)>, DbErr> {
        entity::prelude::Terrace::find()
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::terrace::Column::PublishedAt)
            .all(self.db)
            .await
    }

    /// Gets a single catalog entry with its owner row.
    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<(entity::terrace::Model, Option<entity::user::Model>)>, DbErr> {
        entity::prelude::Terrace::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await
    }

    /// Resolves a caller-supplied venue reference to a catalog row.
    ///
    /// Offline clients send references as strings; anything that does not
    /// parse as a terrace id is treated as unknown rather than an error.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Reference resolved to a published terrace
    /// - `Ok(None)` - Unparseable reference or no such terrace
    /// - `Err(DbErr)` - Database error during lookup
    pub async fn find_by_ref(
        &self,
        terrace_ref: &str,
    ) -> Result<Option<entity::terrace::Model>, DbErr> {
        let Ok(id) = terrace_ref.trim().parse::<i32>() else {
            return Ok(None);
        };

        entity::prelude::Terrace::find_by_id(id).one(self.db).await
    }
}
