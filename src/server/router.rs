//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. Swagger UI is served at `/api/docs`.

use axum::{middleware, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{self, util::api_key::require_api_key},
    model::app::AppState,
};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /` - Health check
/// - `POST /` - Check whether a VIN exists
/// - `POST /insert` - Insert one VIN (API key gated)
/// - `POST /insert/multiple` - Insert many VINs (API key gated)
/// - `DELETE /delete` - Delete a VIN by exact ID and VIN (API key gated)
/// - `POST /registrations/create` - Register a warranty (API key gated)
///
/// Gated routes require `?api_key=` to match [`AppState::api_key`] when one is configured.
///
/// # Returns
/// A `Router` with the state applied, ready to be served.
pub fn routes(state: AppState) -> Router {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "VIN Registry", description = "VIN validation and warranty registration API"),
        tags(
            (name = controller::health::HEALTH_TAG, description = "Health check"),
            (name = controller::vin::VIN_TAG, description = "VIN lookup, insertion and deletion"),
            (name = controller::registration::REGISTRATION_TAG, description = "Warranty registration"),
        )
    )]
    struct ApiDoc;

    let gated = OpenApiRouter::new()
        .routes(routes!(controller::vin::insert_vin))
        .routes(routes!(controller::vin::insert_multiple_vins))
        .routes(routes!(controller::vin::delete_vin))
        .routes(routes!(controller::registration::create_registration))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_key,
        ));

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::health::health_check,
            controller::vin::validate_vin
        ))
        .merge(gated)
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .with_state(state)
}
