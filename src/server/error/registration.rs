use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{error_response, InternalServerError};

/// Failures of the warranty registration workflow.
#[derive(Error, Debug)]
pub enum RegistrationError {
    /// The VIN being registered is not in the identifier store. Nothing was written.
    #[error("VIN {0:?} not found")]
    VinNotFound(String),
    /// The final insert failed. An owner created earlier in the workflow is kept, so
    /// resubmitting the same request reuses it.
    #[error("Failed to insert warranty registration: {0}")]
    InsertFailed(#[source] sea_orm::DbErr),
}

impl IntoResponse for RegistrationError {
    fn into_response(self) -> Response {
        match self {
            Self::VinNotFound(_) => {
                tracing::debug!("{}", self);

                error_response(StatusCode::NOT_FOUND, self.to_string())
            }
            Self::InsertFailed(_) => InternalServerError(self).into_response(),
        }
    }
}
