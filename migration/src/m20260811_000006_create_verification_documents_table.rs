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
                    .table(VerificationDocuments::Table)
                    .if_not_exists()
                    .col(pk_auto(VerificationDocuments::Id))
                    .col(integer(VerificationDocuments::UserId))
                    .col(string(VerificationDocuments::FileName))
                    .col(string(VerificationDocuments::Category))
                    .col(text(VerificationDocuments::Description))
                    .col(string(VerificationDocuments::Status))
                    .col(text_null(VerificationDocuments::AdminNotes))
                    .col(integer_null(VerificationDocuments::ReviewedBy))
                    .col(timestamp_null(VerificationDocuments::ReviewedAt))
                    .col(
                        timestamp(VerificationDocuments::UploadedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(VerificationDocuments::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_verification_document_user_id")
                            .from(VerificationDocuments::Table, VerificationDocuments::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_verification_document_reviewed_by")
                            .from(
                                VerificationDocuments::Table,
                                VerificationDocuments::ReviewedBy,
                            )
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Review queues filter by uploader and status
        manager
            .create_index(
                Index::create()
                    .name("idx_verification_document_user_id_status")
                    .table(VerificationDocuments::Table)
                    .col(VerificationDocuments::UserId)
                    .col(VerificationDocuments::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VerificationDocuments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum VerificationDocuments {
    Table,
    Id,
    UserId,
    FileName,
    Category,
    Description,
    Status,
    AdminNotes,
    ReviewedBy,
    ReviewedAt,
    UploadedAt,
    UpdatedAt,
}
