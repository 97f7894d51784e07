//! `SeaORM` Entity for the `warranty_registration` table

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "warranty_registration")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub vin_id: i32,
    pub owner_id: i32,
    pub purchase_date: Date,
    pub registered_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vehicle_identification_number::Entity",
        from = "Column::VinId",
        to = "super::vehicle_identification_number::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    VehicleIdentificationNumber,
    #[sea_orm(
        belongs_to = "super::trailer_owner::Entity",
        from = "Column::OwnerId",
        to = "super::trailer_owner::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    TrailerOwner,
}

impl Related<super::vehicle_identification_number::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VehicleIdentificationNumber.def()
    }
}

impl Related<super::trailer_owner::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrailerOwner.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
