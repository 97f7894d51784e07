//! Service layer for business logic and orchestration.
//!
//! Services validate input, call the repositories and translate store-level constraint
//! violations into the domain errors in [`crate::server::error`]. `RegistrationService`
//! is the only multi-step operation; the others wrap a single repository call.

pub mod owner;
pub mod registration;
pub mod vin;
