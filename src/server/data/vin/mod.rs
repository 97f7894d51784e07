
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter,
};

use crate::server::model::db::VinModel;

pub struct VinRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VinRepository<'a, C> {
    /// Creates a new instance of [`VinRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns true if a record with exactly this VIN exists (case-sensitive).
    pub async fn exists(&self, vin: &str) -> Result<bool, DbErr> {
        Ok(self.find_by_vin(vin).await?.is_some())
    }

    pub async fn find_by_vin(&self, vin: &str) -> Result<Option<VinModel>, DbErr> {
        entity::prelude::VehicleIdentificationNumber::find()
            .filter(entity::vehicle_identification_number::Column::Vin.eq(vin))
            .one(self.db)
            .await
    }

    /// Inserts a new VIN record.
    ///
    /// Fails with a unique constraint violation if the VIN already exists; the existing
    /// row is left untouched.
    pub async fn create(&self, vin: &str) -> Result<VinModel, DbErr> {
        let vin = entity::vehicle_identification_number::ActiveModel {
            vin: ActiveValue::Set(vin.to_string()),
            ..Default::default()
        };

        vin.insert(self.db).await
    }

    pub async fn find_by_id_and_vin(&self, id: i32, vin: &str) -> Result<Option<VinModel>, DbErr> {
        entity::prelude::VehicleIdentificationNumber::find_by_id(id)
            .filter(entity::vehicle_identification_number::Column::Vin.eq(vin))
            .one(self.db)
            .await
    }

    /// Deletes the record matching both `id` and `vin`
    ///
    /// Returns OK regardless of a match, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32, vin: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::VehicleIdentificationNumber::delete_many()
            .filter(entity::vehicle_identification_number::Column::Id.eq(id))
            .filter(entity::vehicle_identification_number::Column::Vin.eq(vin))
            .exec(self.db)
            .await
    }
}
