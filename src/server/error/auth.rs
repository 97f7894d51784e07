use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Request to a gated route carried a missing or invalid API key")]
    InvalidApiKey,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidApiKey => {
                tracing::debug!("{}", self);

                error_response(StatusCode::FORBIDDEN, "Invalid API key")
            }
        }
    }
}
