//! Test fixture modules for database record creation.
//!
//! - `vin` - VIN records
//! - `owner` - trailer owner records
//! - `registration` - warranty registration records
//! - `factory` - in-memory models that never touch the database

pub mod factory;
pub mod owner;
pub mod registration;
pub mod vin;
