//! `SeaORM` Entity for the `vehicle_identification_number` table

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vehicle_identification_number")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(100))", unique)]
    pub vin: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::warranty_registration::Entity")]
    WarrantyRegistration,
}

impl Related<super::warranty_registration::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WarrantyRegistration.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
