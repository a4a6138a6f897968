use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260810_000001_create_users_table::Users,
    m20260810_000002_create_publication_requests_table::PublicationRequests,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Terraces::Table)
                    .if_not_exists()
                    .col(pk_auto(Terraces::Id))
                    .col(integer_uniq(Terraces::RequestId))
                    .col(integer(Terraces::OwnerId))
                    .col(string(Terraces::Name))
                    .col(text(Terraces::Description))
                    .col(integer(Terraces::Capacity))
                    .col(string(Terraces::Location))
                    .col(double(Terraces::Price))
                    .col(string(Terraces::ContactPhone))
                    .col(string(Terraces::ContactEmail))
                    .col(json(Terraces::Amenities))
                    .col(text_null(Terraces::Rules))
                    .col(
                        timestamp(Terraces::PublishedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_terrace_request_id")
                            .from(Terraces::Table, Terraces::RequestId)
                            .to(PublicationRequests::Table, PublicationRequests::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_terrace_owner_id")
                            .from(Terraces::Table, Terraces::OwnerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Host-scoped listings look terraces up by owner
        manager
            .create_index(
                Index::create()
                    .name("idx_terrace_owner_id")
                    .table(Terraces::Table)
                    .col(Terraces::OwnerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Terraces::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Terraces {
    Table,
    Id,
    RequestId,
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
    PublishedAt,
}
