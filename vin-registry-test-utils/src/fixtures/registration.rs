use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::RegistrationModel, TestContext};

impl TestContext {
    pub fn registration<'a>(&'a mut self) -> RegistrationFixtures<'a> {
        RegistrationFixtures { setup: self }
    }
}

pub struct RegistrationFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> RegistrationFixtures<'a> {
    pub async fn insert_registration(
        &self,
        vin_id: i32,
        owner_id: i32,
        purchase_date: NaiveDate,
    ) -> Result<RegistrationModel, TestError> {
        Ok(entity::prelude::WarrantyRegistration::insert(
            entity::warranty_registration::ActiveModel {
                vin_id: ActiveValue::Set(vin_id),
                owner_id: ActiveValue::Set(owner_id),
                purchase_date: ActiveValue::Set(purchase_date),
                registered_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Count all registration rows.
    pub async fn count(&self) -> Result<usize, TestError> {
        Ok(entity::prelude::WarrantyRegistration::find()
            .all(&self.setup.db)
            .await?
            .len())
    }
}
