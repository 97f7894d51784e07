//! Owner store service.
//!
//! Owners are keyed by email and are never updated once created. The registration
//! workflow resolves owners through [`OwnerService::find_or_create`], which tolerates a
//! concurrent request creating the same owner between its read and its write.

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;

use crate::{
    model::registration::OwnerRequest,
    server::{
        data::owner::OwnerRepository,
        error::{owner::OwnerError, Error},
        model::db::OwnerModel,
        util::{db::is_unique_violation, vin::is_valid_email},
    },
};

pub struct OwnerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OwnerService<'a> {
    /// Creates a new instance of [`OwnerService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<OwnerModel>, Error> {
        let owner_repo = OwnerRepository::new(self.db);

        Ok(owner_repo.find_by_email(email).await?)
    }

    /// Creates a new owner.
    ///
    /// # Returns
    /// - `Ok(OwnerModel)` - The stored owner with its assigned ID
    /// - `Err(Error::OwnerError(OwnerError::MissingEmail))` - Email is blank
    /// - `Err(Error::OwnerError(OwnerError::Conflict))` - An owner with this email exists
    /// - `Err(Error::DbErr)` - Any other database failure
    pub async fn create(&self, owner: OwnerRequest) -> Result<OwnerModel, Error> {
        if !is_valid_email(&owner.email) {
            return Err(OwnerError::MissingEmail.into());
        }

        let owner_repo = OwnerRepository::new(self.db);
        let email = owner.email.clone();

        owner_repo.create(owner).await.map_err(|err| {
            if is_unique_violation(&err) {
                OwnerError::Conflict(email).into()
            } else {
                Error::DbErr(err)
            }
        })
    }

    /// Returns the owner with `owner.email`, creating it from `owner` if absent.
    ///
    /// An existing owner is returned as stored; the submitted attributes are only used
    /// when a new row is created. If another request inserts the same email between the
    /// lookup and the insert, the resulting conflict is resolved by fetching the row that
    /// request created, so callers never see [`OwnerError::Conflict`] from this method.
    ///
    /// # Returns
    /// - `Ok(OwnerModel)` - The existing or newly created owner
    /// - `Err(Error::OwnerError(OwnerError::MissingEmail))` - Email is blank
    /// - `Err(Error::InternalError)` - Insert conflicted but no owner could be found afterwards
    /// - `Err(Error::DbErr)` - Any other database failure
    pub async fn find_or_create(&self, owner: OwnerRequest) -> Result<OwnerModel, Error> {
        if !is_valid_email(&owner.email) {
            return Err(OwnerError::MissingEmail.into());
        }

        if let Some(existing) = self.find_by_email(&owner.email).await? {
            return Ok(existing);
        }

        let email = owner.email.clone();

        match self.create(owner).await {
            Ok(created) => {
                tracing::debug!(owner_id = created.id, email = %email, "Created owner");

                Ok(created)
            }
            Err(Error::OwnerError(OwnerError::Conflict(_))) => {
                tracing::warn!(
                    email = %email,
                    "Owner was created by a concurrent request; using the existing record"
                );

                self.find_by_email(&email).await?.ok_or_else(|| {
                    Error::InternalError(format!(
                        "Owner with email {:?} conflicted on insert but could not be found",
                        email
                    ))
                })
            }
            Err(err) => Err(err),
        }
    }
}
