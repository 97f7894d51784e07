//! Error types for the VIN registry server.
//!
//! Each domain has its own `thiserror` enum (VIN records, owners, registrations, API key
//! authentication, configuration). They are aggregated into [`Error`] so services and
//! handlers can use `?` freely, and every error knows how to turn itself into an HTTP
//! response. Store-level failures never reach the client verbatim: anything without a
//! specific mapping becomes a logged 500 with a generic body.

pub mod auth;
pub mod config;
pub mod owner;
pub mod registration;
pub mod vin;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, owner::OwnerError, registration::RegistrationError,
        vin::VinError,
    },
};

/// Main error type for the VIN registry server.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - API key errors (missing or mismatched key on a gated route)
/// - VIN errors (invalid, duplicate, not found, still referenced)
/// - Owner errors (invalid or duplicate email)
/// - Registration workflow errors (unknown VIN, failed insert)
/// - External library errors (database, socket binding)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// API key check failed on a gated route.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Identifier store error.
    #[error(transparent)]
    VinError(#[from] VinError),
    /// Owner store error.
    #[error(transparent)]
    OwnerError(#[from] OwnerError),
    /// Registration workflow error.
    #[error(transparent)]
    RegistrationError(#[from] RegistrationError),
    /// Internal error indicating a bug or a broken store invariant.
    #[error("Internal error: {0}")]
    InternalError(String),
    /// Database error (query failures, connection issues).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// Domain errors carry their own status mapping; everything else is treated as an
/// internal server error (500) and logged.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::AuthError(err) => err.into_response(),
            Self::VinError(err) => err.into_response(),
            Self::OwnerError(err) => err.into_response(),
            Self::RegistrationError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a JSON error response with the given status and message.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
