use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        vin::{DeleteVinRequest, InsertManyDto, VinDto, VinExistsDto, VinRequest},
    },
    server::{error::Error, model::app::AppState, service::vin::VinService},
};

pub static VIN_TAG: &str = "vin";

/// Check whether a VIN is registered
#[utoipa::path(
    post,
    path = "/",
    tag = VIN_TAG,
    request_body = VinRequest,
    responses(
        (status = 200, description = "Whether the VIN exists", body = VinExistsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn validate_vin(
    State(state): State<AppState>,
    Json(payload): Json<VinRequest>,
) -> Result<impl IntoResponse, Error> {
    let vin_service = VinService::new(&state.db);

    let exists = vin_service.exists(&payload.vin).await?;

    Ok((StatusCode::OK, Json(VinExistsDto { exists })))
}

/// Insert a single VIN
#[utoipa::path(
    post,
    path = "/insert",
    tag = VIN_TAG,
    request_body = VinRequest,
    params(("api_key" = Option<String>, Query, description = "Shared API key, required when configured")),
    responses(
        (status = 201, description = "VIN inserted", body = VinDto),
        (status = 400, description = "VIN is empty or longer than 100 characters", body = ErrorDto),
        (status = 403, description = "Missing or invalid API key", body = ErrorDto),
        (status = 409, description = "VIN already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn insert_vin(
    State(state): State<AppState>,
    Json(payload): Json<VinRequest>,
) -> Result<impl IntoResponse, Error> {
    let vin_service = VinService::new(&state.db);

    let vin_model = vin_service.insert(&payload.vin).await?;

    Ok((StatusCode::CREATED, Json(VinDto::from(vin_model))))
}

/// Insert many VINs, reporting which were inserted and which were rejected
#[utoipa::path(
    post,
    path = "/insert/multiple",
    tag = VIN_TAG,
    request_body = Vec<VinRequest>,
    params(("api_key" = Option<String>, Query, description = "Shared API key, required when configured")),
    responses(
        (status = 200, description = "Per-VIN outcome in request order", body = InsertManyDto),
        (status = 403, description = "Missing or invalid API key", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn insert_multiple_vins(
    State(state): State<AppState>,
    Json(payload): Json<Vec<VinRequest>>,
) -> Result<impl IntoResponse, Error> {
    let vin_service = VinService::new(&state.db);

    let vins = payload.into_iter().map(|request| request.vin).collect();
    let outcome = vin_service.insert_many(vins).await?;

    Ok((StatusCode::OK, Json(outcome)))
}

/// Delete a VIN matching both ID and VIN
#[utoipa::path(
    delete,
    path = "/delete",
    tag = VIN_TAG,
    request_body = DeleteVinRequest,
    params(("api_key" = Option<String>, Query, description = "Shared API key, required when configured")),
    responses(
        (status = 204, description = "VIN deleted"),
        (status = 403, description = "Missing or invalid API key", body = ErrorDto),
        (status = 404, description = "No VIN matches both ID and VIN", body = ErrorDto),
        (status = 409, description = "VIN is referenced by a warranty registration", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_vin(
    State(state): State<AppState>,
    Json(payload): Json<DeleteVinRequest>,
) -> Result<impl IntoResponse, Error> {
    let vin_service = VinService::new(&state.db);

    vin_service.delete(payload.id, &payload.vin).await?;

    Ok(StatusCode::NO_CONTENT)
}
