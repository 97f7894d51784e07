#[cfg(test)]
mod tests;

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

use crate::server::model::db::RegistrationModel;

pub struct RegistrationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RegistrationRepository<'a, C> {
    /// Creates a new instance of [`RegistrationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a warranty registration, stamping `registered_at` with the current time.
    ///
    /// Both `vin_id` and `owner_id` must reference existing rows; the foreign key
    /// constraints reject the insert otherwise.
    pub async fn create(
        &self,
        vin_id: i32,
        owner_id: i32,
        purchase_date: NaiveDate,
    ) -> Result<RegistrationModel, DbErr> {
        let registration = entity::warranty_registration::ActiveModel {
            vin_id: ActiveValue::Set(vin_id),
            owner_id: ActiveValue::Set(owner_id),
            purchase_date: ActiveValue::Set(purchase_date),
            registered_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        registration.insert(self.db).await
    }
}
