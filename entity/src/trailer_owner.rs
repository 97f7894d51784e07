//! `SeaORM` Entity for the `trailer_owner` table

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "trailer_owner")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub mobile_phone: Option<String>,
    pub created_at: DateTime,
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
