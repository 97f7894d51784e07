//! Request and response bodies exchanged over the HTTP API.

pub mod api;
pub mod registration;
pub mod vin;
