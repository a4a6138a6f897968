use sea_orm::entity::prelude::*;

/// Host-submitted terrace listing awaiting admin review.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "publication_requests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub owner_id: i32,
    pub name: String,
    pub description: String,
    pub capacity: i32,
    pub location: String,
    pub price: f64,
    pub contact_phone: String,
    pub contact_email: String,
    pub amenities: Json,
    pub rules: Option<String>,
    pub status: PublicationStatus,
    pub admin_notes: Option<String>,
    pub reviewed_by: Option<i32>,
    pub reviewed_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum PublicationStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "approved")]
    Approved,
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

impl PublicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PublicationStatus::Pending => "pending",
            PublicationStatus::Approved => "approved",
            PublicationStatus::Rejected => "rejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(PublicationStatus::Pending),
            "approved" => Some(PublicationStatus::Approved),
            "rejected" => Some(PublicationStatus::Rejected),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id"
    )]
    Owner,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::ReviewedBy",
        to = "super::user::Column::Id"
    )]
    Reviewer,
    #[sea_orm(has_one = "super::terrace::Entity")]
    Terrace,
}

impl Related<super::terrace::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Terrace.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
