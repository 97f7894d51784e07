//! Server application models and type definitions.
//!
//! Application state shared by handlers and type aliases for the SeaORM entity models.

pub mod app;
pub mod db;
