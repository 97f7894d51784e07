//! Utility functions for controller request handling.
//!
//! Provides the shared API key check applied to the mutating routes.

pub mod api_key;
