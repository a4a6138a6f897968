//! Public terrace catalog.
//!
//! The catalog only ever contains approved listings (rows are created by the
//! publication workflow on approval), so there is no status to filter here.

use sea_orm::DatabaseConnection;

use crate::server::{data::terrace::TerraceRepository, error::AppError};

/// Service providing read access to the published terrace catalog.
pub struct TerraceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TerraceService<'a> {
    /// Creates a new TerraceService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `TerraceService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the published catalog, newest first, with each owner attached.
    pub async fn list(
        &self,
    ) -> Result<Vec<(entity::terrace::Model, Option<entity::user::Model>)>, AppError> {
        let terrace_repo = TerraceRepository::new(self.db);

        let terraces = terrace_repo.get_all().await?;

        Ok(terraces)
    }

    /// Fetches a single published listing with its owner.
    ///
    /// # Arguments
    /// - `terrace_id` - The catalog id
    ///
    /// # Returns
    /// - `Ok((Model, Option<Model>))` - The listing and its owner
    /// - `Err(AppError::NotFound)` - No published listing under that id
    pub async fn get(
        &self,
        terrace_id: i32,
    ) -> Result<(entity::terrace::Model, Option<entity::user::Model>), AppError> {
        let terrace_repo = TerraceRepository::new(self.db);

        let terrace = terrace_repo.get_by_id(terrace_id).await?.ok_or_else(|| {
            AppError::NotFound("Terraza no encontrada o no está aprobada".to_string())
        })?;

        Ok(terrace)
    }
}
