//! Database model type aliases.
//!
//! Short names for the SeaORM entity models used throughout the server, so signatures don't
//! have to spell out the generated `entity` module paths.

/// A stored VIN.
///
/// # Fields (from `entity::vehicle_identification_number::Model`)
/// - `id` - Primary key assigned on insert
/// - `vin` - The VIN itself, unique and at most 100 characters
pub type VinModel = entity::vehicle_identification_number::Model;

/// A trailer owner, keyed by email.
///
/// # Fields (from `entity::trailer_owner::Model`)
/// - `id` - Primary key assigned on insert
/// - `email` - Unique owner email
/// - `first_name`, `last_name`, `address`, `city`, `state`, `country`, `mobile_phone` -
///   optional contact attributes
/// - `created_at` - Timestamp when the owner was first seen
pub type OwnerModel = entity::trailer_owner::Model;

/// A warranty registration linking a VIN to an owner.
///
/// # Fields (from `entity::warranty_registration::Model`)
/// - `id` - Primary key assigned on insert
/// - `vin_id` - Foreign key to the registered VIN
/// - `owner_id` - Foreign key to the owner
/// - `purchase_date` - Date of purchase supplied by the caller
/// - `registered_at` - Timestamp assigned when the registration was inserted
pub type RegistrationModel = entity::warranty_registration::Model;
