use sea_orm::entity::prelude::*;

/// Public catalog row, created when a publication request is approved.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "terraces")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub request_id: i32,
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
    pub published_at: DateTimeUtc,
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
        belongs_to = "super::publication_request::Entity",
        from = "Column::RequestId",
        to = "super::publication_request::Column::Id"
    )]
    Request,
    #[sea_orm(has_many = "super::reservation::Entity")]
    Reservation,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl Related<super::publication_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Request.def()
    }
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
