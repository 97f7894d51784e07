//! `SeaORM` Entity prelude

pub use super::trailer_owner::Entity as TrailerOwner;
pub use super::vehicle_identification_number::Entity as VehicleIdentificationNumber;
pub use super::warranty_registration::Entity as WarrantyRegistration;
