//! Tests sending full HTTP requests through the application router.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt;
use vin_registry::{
    model::{
        api::{ErrorDto, HealthDto},
        vin::{VinDto, VinExistsDto},
    },
    server::{model::app::AppState, router::routes},
};

use super::*;

static API_KEY: &str = "test-key";

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(state: AppState, request: Request<Body>) -> axum::response::Response {
    routes(state).oneshot(request).await.unwrap()
}

/// Expect `GET /` to answer with the health payload
#[tokio::test]
async fn serves_health_check() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let resp = send(test.into_app_state_with_key(API_KEY), request).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: HealthDto = read_json(resp).await;
    assert_eq!(body.hello, "World");

    Ok(())
}

/// Expect `POST /` to stay open when an API key is configured
#[tokio::test]
async fn validate_is_not_gated() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_vin_tables()
        .with_vin("1HGCM82633A004352")
        .build()
        .await?;

    let request = json_request(Method::POST, "/", json!({ "vin": "1HGCM82633A004352" }));
    let resp = send(test.into_app_state_with_key(API_KEY), request).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: VinExistsDto = read_json(resp).await;
    assert!(body.exists);

    Ok(())
}

/// Expect the long field name to be accepted in request bodies
#[tokio::test]
async fn accepts_long_vin_field_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_vin_tables()
        .with_vin("A1")
        .build()
        .await?;

    let request = json_request(
        Method::POST,
        "/",
        json!({ "vehicle_identification_number": "A1" }),
    );
    let resp = send(test.into_app_state(), request).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: VinExistsDto = read_json(resp).await;
    assert!(body.exists);

    Ok(())
}

/// Expect gated routes to answer 403 without writing when the key is missing or wrong
#[tokio::test]
async fn rejects_missing_or_wrong_api_key() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_vin_tables().build().await?;

    for uri in ["/insert", "/insert?api_key=wrong"] {
        let request = json_request(Method::POST, uri, json!({ "vin": "A1" }));
        let resp = send(test.into_app_state_with_key(API_KEY), request).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        let body: ErrorDto = read_json(resp).await;
        assert!(!body.error.is_empty());
    }
    assert_eq!(test.vin().count().await?, 0);

    Ok(())
}

/// Expect a repeated key to be answered like a missing one, with or without a configured key
#[tokio::test]
async fn treats_repeated_api_key_as_missing() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_vin_tables().build().await?;
    let uri = format!("/insert?api_key={}&api_key={}", API_KEY, API_KEY);

    let request = json_request(Method::POST, &uri, json!({ "vin": "A1" }));
    let resp = send(test.into_app_state_with_key(API_KEY), request).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: ErrorDto = read_json(resp).await;
    assert!(!body.error.is_empty());
    assert_eq!(test.vin().count().await?, 0);

    let request = json_request(Method::POST, &uri, json!({ "vin": "A1" }));
    let resp = send(test.into_app_state(), request).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(test.vin().count().await?, 1);

    Ok(())
}

/// Expect every mutating route to be gated
#[tokio::test]
async fn gates_every_mutating_route() -> Result<(), TestError> {
    let test = TestBuilder::new().with_vin_tables().build().await?;

    let requests = vec![
        json_request(Method::POST, "/insert", json!({ "vin": "A1" })),
        json_request(Method::POST, "/insert/multiple", json!([{ "vin": "A1" }])),
        json_request(Method::DELETE, "/delete", json!({ "id": 1, "vin": "A1" })),
        json_request(
            Method::POST,
            "/registrations/create",
            json!({
                "owner": { "email": "ada@example.com" },
                "vin": "A1",
                "purchase_date": "2024-05-01"
            }),
        ),
    ];

    for request in requests {
        let uri = request.uri().to_string();
        let resp = send(test.into_app_state_with_key(API_KEY), request).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN, "{}", uri);
    }

    Ok(())
}

/// Expect the VIN lifecycle to work end to end with a valid key
#[tokio::test]
async fn inserts_and_deletes_with_valid_key() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_vin_tables().build().await?;
    let state = test.into_app_state_with_key(API_KEY);

    let request = json_request(
        Method::POST,
        &format!("/insert?api_key={}", API_KEY),
        json!({ "vin": "A1" }),
    );
    let resp = send(state.clone(), request).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let vin_dto: VinDto = read_json(resp).await;

    let request = json_request(
        Method::POST,
        &format!("/insert?api_key={}", API_KEY),
        json!({ "vin": "A1" }),
    );
    let resp = send(state.clone(), request).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let delete = || {
        json_request(
            Method::DELETE,
            &format!("/delete?api_key={}", API_KEY),
            json!({ "id": vin_dto.id, "vin": "A1" }),
        )
    };
    let resp = send(state.clone(), delete()).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = send(state, delete()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(test.vin().count().await?, 0);

    Ok(())
}

/// Expect gated routes to be open when no key is configured
#[tokio::test]
async fn gate_disabled_without_configured_key() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_vin_tables().build().await?;

    let request = json_request(
        Method::POST,
        "/insert/multiple",
        json!([{ "vin": "A1" }, { "vin": "A1" }, { "vin": "B2" }]),
    );
    let resp = send(test.into_app_state(), request).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = read_json(resp).await;
    assert_eq!(body["inserted"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["rejected"], json!(["A1"]));
    assert_eq!(test.vin().count().await?, 2);

    Ok(())
}

/// Expect the OpenAPI document to list every route
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let request = Request::builder()
        .uri("/api/docs/openapi.json")
        .body(Body::empty())
        .unwrap();
    let resp = send(test.into_app_state(), request).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = read_json(resp).await;
    for path in [
        "/",
        "/insert",
        "/insert/multiple",
        "/delete",
        "/registrations/create",
    ] {
        assert!(body["paths"].get(path).is_some(), "missing {}", path);
    }

    Ok(())
}
