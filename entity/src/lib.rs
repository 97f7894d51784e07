//! `SeaORM` Entity definitions

pub mod prelude;

pub mod trailer_owner;
pub mod vehicle_identification_number;
pub mod warranty_registration;
