use axum::{
    extract::{Query, Request, State},
    http::Uri,
    middleware::Next,
    response::Response,
};
use serde::Deserialize;

use crate::server::{
    error::{auth::AuthError, Error},
    model::app::AppState,
};

/// Query string carrying the shared API key
#[derive(Debug, Default, Deserialize)]
pub struct ApiKeyQuery {
    pub api_key: Option<String>,
}

/// Validate that `provided` matches the configured key.
///
/// Returns `Ok(())` when no key is configured or the keys are equal, and
/// [`AuthError::InvalidApiKey`] otherwise.
pub fn validate_api_key(expected: Option<&str>, provided: Option<&str>) -> Result<(), Error> {
    match expected {
        None => Ok(()),
        Some(expected) if provided == Some(expected) => Ok(()),
        Some(_) => Err(Error::AuthError(AuthError::InvalidApiKey)),
    }
}

/// Read the `api_key` query parameter from `uri`.
///
/// A query string that can't be parsed, such as one repeating `api_key`, counts as no key.
pub fn api_key_from_uri(uri: &Uri) -> Option<String> {
    Query::<ApiKeyQuery>::try_from_uri(uri)
        .ok()
        .and_then(|Query(query)| query.api_key)
}

/// Middleware rejecting requests whose `api_key` query parameter doesn't match
/// [`AppState::api_key`].
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, Error> {
    let provided = api_key_from_uri(request.uri());
    validate_api_key(state.api_key.as_deref(), provided.as_deref())?;

    Ok(next.run(request).await)
}
