use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum OwnerError {
    #[error("Owner email is required")]
    MissingEmail,
    #[error("An owner with email {0:?} already exists")]
    Conflict(String),
}

impl IntoResponse for OwnerError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let status = match self {
            Self::MissingEmail => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
        };

        error_response(status, self.to_string())
    }
}
