use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "reservations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub client_id: i32,
    /// Resolved venue; NULL when an offline record referenced a venue the
    /// catalog does not know.
    pub terrace_id: Option<i32>,
    /// Raw venue reference as supplied by the caller, kept for traceability.
    pub terrace_ref: String,
    pub terrace_name: String,
    pub reservation_date: Date,
    pub start_time: String,
    pub end_time: String,
    pub event_type: String,
    pub comments: Option<String>,
    pub guests: i32,
    pub is_visit: bool,
    pub status: ReservationStatus,
    pub total_price: f64,
    pub origin_offline: bool,
    /// Client-side temporary identifier carried by offline records; together
    /// with `client_id` it forms the bulk-sync idempotency key.
    pub client_ref: Option<String>,
    pub sync_log: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum ReservationStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "confirmed")]
    Confirmed,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
    #[sea_orm(string_value = "completed")]
    Completed,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "pending",
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::Cancelled => "cancelled",
            ReservationStatus::Completed => "completed",
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::ClientId",
        to = "super::user::Column::Id"
    )]
    Client,
    #[sea_orm(
        belongs_to = "super::terrace::Entity",
        from = "Column::TerraceId",
        to = "super::terrace::Column::Id"
    )]
    Terrace,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Client.def()
    }
}

impl Related<super::terrace::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Terrace.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
