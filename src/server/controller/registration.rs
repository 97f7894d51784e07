use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        registration::{CreateRegistrationRequest, RegistrationDto},
    },
    server::{error::Error, model::app::AppState, service::registration::RegistrationService},
};

pub static REGISTRATION_TAG: &str = "registration";

/// Register a warranty for an existing VIN
///
/// The owner is looked up by email and created if absent.
#[utoipa::path(
    post,
    path = "/registrations/create",
    tag = REGISTRATION_TAG,
    request_body = CreateRegistrationRequest,
    params(("api_key" = Option<String>, Query, description = "Shared API key, required when configured")),
    responses(
        (status = 201, description = "Warranty registered", body = RegistrationDto),
        (status = 400, description = "Owner email is blank", body = ErrorDto),
        (status = 403, description = "Missing or invalid API key", body = ErrorDto),
        (status = 404, description = "VIN not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_registration(
    State(state): State<AppState>,
    Json(payload): Json<CreateRegistrationRequest>,
) -> Result<impl IntoResponse, Error> {
    let registration_service = RegistrationService::new(&state.db);

    let registration = registration_service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(registration)))
}
