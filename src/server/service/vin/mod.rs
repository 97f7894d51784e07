//! Identifier store service.
//!
//! Validates VINs before they reach the store and turns unique and foreign key
//! violations into [`VinError`]s. Bulk insertion isolates per-item failures so one
//! duplicate never aborts the batch.

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;

use crate::{
    model::vin::InsertManyDto,
    server::{
        data::vin::VinRepository,
        error::{vin::VinError, Error},
        model::db::VinModel,
        util::{
            db::{is_foreign_key_violation, is_unique_violation},
            vin::is_valid_vin,
        },
    },
};

pub struct VinService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VinService<'a> {
    /// Creates a new instance of [`VinService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Reports whether a VIN exists.
    ///
    /// Never fails on input: a VIN that could not have been stored, such as an empty
    /// string, is simply reported as absent without querying the database.
    ///
    /// # Returns
    /// - `Ok(true)` / `Ok(false)` - Whether a record with exactly this VIN exists
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn exists(&self, vin: &str) -> Result<bool, Error> {
        if !is_valid_vin(vin) {
            return Ok(false);
        }

        let vin_repo = VinRepository::new(self.db);

        Ok(vin_repo.exists(vin).await?)
    }

    /// Inserts a single VIN.
    ///
    /// # Returns
    /// - `Ok(VinModel)` - The stored record with its assigned ID
    /// - `Err(Error::VinError(VinError::Invalid))` - VIN is empty or longer than 100 characters
    /// - `Err(Error::VinError(VinError::Conflict))` - VIN already exists
    /// - `Err(Error::DbErr)` - Any other database failure
    pub async fn insert(&self, vin: &str) -> Result<VinModel, Error> {
        if !is_valid_vin(vin) {
            return Err(VinError::Invalid(vin.to_string()).into());
        }

        let vin_repo = VinRepository::new(self.db);

        vin_repo.create(vin).await.map_err(|err| {
            if is_unique_violation(&err) {
                VinError::Conflict(vin.to_string()).into()
            } else {
                Error::DbErr(err)
            }
        })
    }

    /// Inserts each VIN independently, in input order.
    ///
    /// Invalid and duplicate VINs (including repeats within the same batch) are collected
    /// in `rejected`; `inserted.len() + rejected.len()` always equals the input length and
    /// both lists preserve input order.
    ///
    /// # Returns
    /// - `Ok(InsertManyDto)` - Per-item outcome of the batch
    /// - `Err(Error::DbErr)` - A database failure other than a duplicate key; entries
    ///   processed before the failure stay inserted
    pub async fn insert_many(&self, vins: Vec<String>) -> Result<InsertManyDto, Error> {
        let mut outcome = InsertManyDto::default();

        for vin in vins {
            match self.insert(&vin).await {
                Ok(model) => outcome.inserted.push(model.into()),
                Err(Error::VinError(err)) => {
                    tracing::debug!("Rejected VIN in bulk insert: {}", err);

                    outcome.rejected.push(vin);
                }
                Err(err) => return Err(err),
            }
        }

        Ok(outcome)
    }

    /// Deletes the record matching both `id` and `vin`.
    ///
    /// # Returns
    /// - `Ok(())` - The record was deleted
    /// - `Err(Error::VinError(VinError::NotFound))` - No record matches both fields; nothing
    ///   was deleted
    /// - `Err(Error::VinError(VinError::InUse))` - The record is referenced by a warranty
    ///   registration
    /// - `Err(Error::DbErr)` - Any other database failure
    pub async fn delete(&self, id: i32, vin: &str) -> Result<(), Error> {
        let vin_repo = VinRepository::new(self.db);

        let not_found = || VinError::NotFound {
            id,
            vin: vin.to_string(),
        };

        if vin_repo.find_by_id_and_vin(id, vin).await?.is_none() {
            return Err(not_found().into());
        }

        let result = vin_repo.delete(id, vin).await.map_err(|err| {
            if is_foreign_key_violation(&err) {
                VinError::InUse {
                    id,
                    vin: vin.to_string(),
                }
                .into()
            } else {
                Error::DbErr(err)
            }
        })?;

        // Another request may have deleted the row between the lookup and the delete
        if result.rows_affected == 0 {
            return Err(not_found().into());
        }

        tracing::info!(id = id, vin = %vin, "Deleted VIN");

        Ok(())
    }
}
