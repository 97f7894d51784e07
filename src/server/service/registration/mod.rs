//! Warranty registration workflow.
//!
//! The only multi-step operation in the service. The steps run in order on the shared
//! pool without an enclosing transaction:
//!
//! 1. Resolve the VIN. An unknown VIN fails with [`RegistrationError::VinNotFound`] before
//!    anything is written.
//! 2. Find or create the owner by email. A newly created owner is kept even if step 3
//!    fails, so resubmitting the same request reuses it.
//! 3. Insert the registration. A failure here is reported as
//!    [`RegistrationError::InsertFailed`].


use sea_orm::DatabaseConnection;

use crate::{
    model::registration::{CreateRegistrationRequest, RegistrationDto},
    server::{
        data::{registration::RegistrationRepository, vin::VinRepository},
        error::{registration::RegistrationError, Error},
        service::owner::OwnerService,
    },
};

pub struct RegistrationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RegistrationService<'a> {
    /// Creates a new instance of [`RegistrationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a warranty for an existing VIN.
    ///
    /// # Arguments
    /// - `request` - VIN, owner attributes and purchase date
    ///
    /// # Returns
    /// - `Ok(RegistrationDto)` - The registration composed with its VIN and owner
    /// - `Err(Error::RegistrationError(RegistrationError::VinNotFound))` - VIN is not stored;
    ///   no owner or registration was written
    /// - `Err(Error::OwnerError(OwnerError::MissingEmail))` - Owner email is blank
    /// - `Err(Error::RegistrationError(RegistrationError::InsertFailed))` - Registration insert
    ///   failed after the owner was resolved
    /// - `Err(Error::DbErr)` - VIN or owner lookup failed
    ///
    /// [`OwnerError::MissingEmail`]: crate::server::error::owner::OwnerError::MissingEmail
    pub async fn create(&self, request: CreateRegistrationRequest) -> Result<RegistrationDto, Error> {
        let vin_repo = VinRepository::new(self.db);
        let owner_service = OwnerService::new(self.db);
        let registration_repo = RegistrationRepository::new(self.db);

        let vin_model = vin_repo
            .find_by_vin(&request.vin)
            .await?
            .ok_or_else(|| RegistrationError::VinNotFound(request.vin.clone()))?;

        let owner_model = owner_service.find_or_create(request.owner).await?;

        let registration = registration_repo
            .create(vin_model.id, owner_model.id, request.purchase_date)
            .await
            .map_err(RegistrationError::InsertFailed)?;

        tracing::info!(
            registration_id = registration.id,
            vin = %vin_model.vin,
            owner_id = owner_model.id,
            "Created warranty registration"
        );

        Ok(RegistrationDto {
            id: registration.id,
            vin: vin_model.into(),
            owner: owner_model.into(),
            purchase_date: registration.purchase_date,
            registered_at: registration.registered_at,
        })
    }
}
