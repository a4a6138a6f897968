use sea_orm::entity::prelude::*;

/// Metadata for an identity document under admin review. The file bytes
/// themselves live in external storage.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "verification_documents")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub file_name: String,
    pub category: DocumentCategory,
    pub description: String,
    pub status: DocumentStatus,
    pub admin_notes: Option<String>,
    pub reviewed_by: Option<i32>,
    pub reviewed_at: Option<DateTimeUtc>,
    pub uploaded_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum DocumentCategory {
    #[sea_orm(string_value = "identificacion")]
    Identification,
    #[sea_orm(string_value = "permisos_terrazas")]
    TerracePermits,
    #[sea_orm(string_value = "comprobante_domicilio")]
    ProofOfAddress,
    #[sea_orm(string_value = "general")]
    General,
}

impl DocumentCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentCategory::Identification => "identificacion",
            DocumentCategory::TerracePermits => "permisos_terrazas",
            DocumentCategory::ProofOfAddress => "comprobante_domicilio",
            DocumentCategory::General => "general",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "identificacion" => Some(DocumentCategory::Identification),
            "permisos_terrazas" => Some(DocumentCategory::TerracePermits),
            "comprobante_domicilio" => Some(DocumentCategory::ProofOfAddress),
            "general" => Some(DocumentCategory::General),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum DocumentStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "under_review")]
    UnderReview,
    #[sea_orm(string_value = "approved")]
    Approved,
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Pending => "pending",
            DocumentStatus::UnderReview => "under_review",
            DocumentStatus::Approved => "approved",
            DocumentStatus::Rejected => "rejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(DocumentStatus::Pending),
            "under_review" => Some(DocumentStatus::UnderReview),
            "approved" => Some(DocumentStatus::Approved),
            "rejected" => Some(DocumentStatus::Rejected),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::ReviewedBy",
        to = "super::user::Column::Id"
    )]
    Reviewer,
}

impl ActiveModelBehavior for ActiveModel {}
