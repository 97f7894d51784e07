//! Server application core modules.
//!
//! This module contains all server-side functionality: HTTP routing, request handlers,
//! database repositories and the services that compose them into the VIN and warranty
//! registration operations.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
