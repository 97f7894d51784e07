use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum VinError {
    #[error("VIN {0:?} must be between 1 and 100 characters")]
    Invalid(String),
    #[error("VIN {0:?} already exists")]
    Conflict(String),
    #[error("No VIN record with ID {id} and VIN {vin:?}")]
    NotFound { id: i32, vin: String },
    #[error("VIN record ID {id} ({vin:?}) is referenced by a warranty registration")]
    InUse { id: i32, vin: String },
}

impl IntoResponse for VinError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let status = match self {
            Self::Invalid(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) | Self::InUse { .. } => StatusCode::CONFLICT,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
        };

        error_response(status, self.to_string())
    }
}
