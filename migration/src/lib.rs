pub use sea_orm_migration::prelude::*;

mod m20260810_000001_create_users_table;
mod m20260810_000002_create_publication_requests_table;
mod m20260810_000003_create_terraces_table;
mod m20260811_000004_create_reservations_table;
mod m20260811_000005_create_notifications_table;
mod m20260811_000006_create_verification_documents_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260810_000001_create_users_table::Migration),
            Box::new(m20260810_000002_create_publication_requests_table::Migration),
            Box::new(m20260810_000003_create_terraces_table::Migration),
            Box::new(m20260811_000004_create_reservations_table::Migration),
            Box::new(m20260811_000005_create_notifications_table::Migration),
            Box::new(m20260811_000006_create_verification_documents_table::Migration),
        ]
    }
}
