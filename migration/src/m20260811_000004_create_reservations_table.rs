use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260810_000001_create_users_table::Users, m20260810_000003_create_terraces_table::Terraces,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservations::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservations::Id))
                    .col(integer(Reservations::ClientId))
                    .col(integer_null(Reservations::TerraceId))
                    .col(string(Reservations::TerraceRef))
                    .col(string(Reservations::TerraceName))
                    .col(date(Reservations::ReservationDate))
                    .col(string(Reservations::StartTime))
                    .col(string(Reservations::EndTime))
                    .col(string(Reservations::EventType))
                    .col(text_null(Reservations::Comments))
                    .col(integer(Reservations::Guests))
                    .col(boolean(Reservations::IsVisit))
                    .col(string(Reservations::Status))
                    .col(double(Reservations::TotalPrice))
                    .col(boolean(Reservations::OriginOffline))
                    .col(string_null(Reservations::ClientRef))
                    .col(text_null(Reservations::SyncLog))
                    .col(
                        timestamp(Reservations::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Reservations::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_client_id")
                            .from(Reservations::Table, Reservations::ClientId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_terrace_id")
                            .from(Reservations::Table, Reservations::TerraceId)
                            .to(Terraces::Table, Terraces::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Client listings look reservations up by owner
        manager
            .create_index(
                Index::create()
                    .name("idx_reservation_client_id")
                    .table(Reservations::Table)
                    .col(Reservations::ClientId)
                    .to_owned(),
            )
            .await?;

        // Host listings join through the terrace
        manager
            .create_index(
                Index::create()
                    .name("idx_reservation_terrace_id")
                    .table(Reservations::Table)
                    .col(Reservations::TerraceId)
                    .to_owned(),
            )
            .await?;

        // Bulk-sync idempotency key: one server record per client temporary id.
        // SQLite treats NULLs as distinct, so records without a temporary id
        // never collide on this index.
        manager
            .create_index(
                Index::create()
                    .name("idx_reservation_sync_key_unique")
                    .table(Reservations::Table)
                    .col(Reservations::ClientId)
                    .col(Reservations::ClientRef)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reservations {
    Table,
    Id,
    ClientId,
    TerraceId,
    TerraceRef,
    TerraceName,
    ReservationDate,
    StartTime,
    EndTime,
    EventType,
    Comments,
    Guests,
    IsVisit,
    Status,
    TotalPrice,
    OriginOffline,
    ClientRef,
    SyncLog,
    CreatedAt,
    UpdatedAt,
}
