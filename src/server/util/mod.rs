//! Utility functions shared by services and controllers.
//!
//! - `db` - classification of database errors into constraint violations
//! - `vin` - VIN and owner input validation

pub mod db;
pub mod vin;
