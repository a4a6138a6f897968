use sea_orm_migration::{prelude::*, schema::*};

use super::m20260810_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PublicationRequests::Table)
                    .if_not_exists()
                    .col(pk_auto(PublicationRequests::Id))
                    .col(integer(PublicationRequests::OwnerId))
                    .col(string(PublicationRequests::Name))
                    .col(text(PublicationRequests::Description))
                    .col(integer(PublicationRequests::Capacity))
                    .col(string(PublicationRequests::Location))
                    .col(double(PublicationRequests::Price))
                    .col(string(PublicationRequests::ContactPhone))
                    .col(string(PublicationRequests::ContactEmail))
                    .col(json(PublicationRequests::Amenities))
                    .col(text_null(PublicationRequests::Rules))
                    .col(string(PublicationRequests::Status))
                    .col(text_null(PublicationRequests::AdminNotes))
                    .col(integer_null(PublicationRequests::ReviewedBy))
                    .col(timestamp_null(PublicationRequests::ReviewedAt))
                    .col(
                        timestamp(PublicationRequests::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_publication_request_owner_id")
                            .from(PublicationRequests::Table, PublicationRequests::OwnerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_publication_request_reviewed_by")
                            .from(PublicationRequests::Table, PublicationRequests::ReviewedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Admin review queue is filtered by status
        manager
            .create_index(
                Index::create()
                    .name("idx_publication_request_status")
                    .table(PublicationRequests::Table)
                    .col(PublicationRequests::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PublicationRequests::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PublicationRequests {
    Table,
    Id,
    OwnerId,
    Name,
    Description,
    Capacity,
    Location,
    Price,
    ContactPhone,
    ContactEmail,
    Amenities,
    Rules,
    Status,
    AdminNotes,
    ReviewedBy,
    ReviewedAt,
    CreatedAt,
}
