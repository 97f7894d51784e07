//! VIN validation and warranty registration service.
//!
//! `model` holds the JSON request and response bodies; `server` holds everything that talks
//! to the database or handles HTTP.

pub mod model;
pub mod server;
