//! HTTP controller endpoints for the VIN registry API.
//!
//! Controllers decode JSON bodies, call the services and shape their results into
//! responses. Errors are returned as [`crate::server::error::Error`], which maps itself to a
//! status code and `ErrorDto` body.

pub mod health;
pub mod registration;
pub mod util;
pub mod vin;
