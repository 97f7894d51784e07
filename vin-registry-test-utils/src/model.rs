//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main service crate so fixtures and assertions read the
//! same on both sides.

/// Type alias for the VIN database model.
pub type VinModel = entity::vehicle_identification_number::Model;

/// Type alias for the trailer owner database model.
pub type OwnerModel = entity::trailer_owner::Model;

/// Type alias for the warranty registration database model.
pub type RegistrationModel = entity::warranty_registration::Model;
