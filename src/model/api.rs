use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Static payload returned by the health check
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthDto {
    #[serde(rename = "Hello")]
    pub hello: String,
}
