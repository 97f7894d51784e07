use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::VinModel, TestContext};

impl TestContext {
    pub fn vin<'a>(&'a mut self) -> VinFixtures<'a> {
        VinFixtures { setup: self }
    }
}

pub struct VinFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> VinFixtures<'a> {
    /// Insert a VIN record directly, bypassing the repository under test.
    pub async fn insert_vin(&self, vin: &str) -> Result<VinModel, TestError> {
        Ok(entity::prelude::VehicleIdentificationNumber::insert(
            entity::vehicle_identification_number::ActiveModel {
                vin: ActiveValue::Set(vin.to_string()),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Count VIN rows, used to assert that a failed operation left no trace.
    pub async fn count(&self) -> Result<usize, TestError> {
        Ok(entity::prelude::VehicleIdentificationNumber::find()
            .all(&self.setup.db)
            .await?
            .len())
    }
}
