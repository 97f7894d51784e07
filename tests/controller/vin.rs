//! Tests for the VIN endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use vin_registry::{
    model::{
        api::ErrorDto,
        vin::{DeleteVinRequest, InsertManyDto, VinDto, VinExistsDto, VinRequest},
    },
    server::controller::vin::{delete_vin, insert_multiple_vins, insert_vin, validate_vin},
};

use super::*;

fn vin_request(vin: &str) -> Json<VinRequest> {
    Json(VinRequest {
        vin: vin.to_string(),
    })
}

/// Expect 200 with `exists: true` for a stored VIN
#[tokio::test]
async fn validate_returns_true_for_known_vin() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_vin_tables()
        .with_vin("1HGCM82633A004352")
        .build()
        .await?;

    let result = validate_vin(
        State(test.into_app_state()),
        vin_request("1HGCM82633A004352"),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: VinExistsDto = read_json(resp).await;
    assert!(body.exists);

    Ok(())
}

/// Expect 200 with `exists: false` for an unknown VIN
#[tokio::test]
async fn validate_returns_false_for_unknown_vin() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_vin_tables()
        .with_vin("1HGCM82633A004352")
        .build()
        .await?;

    let result = validate_vin(
        State(test.into_app_state()),
        vin_request("0000000000000000A"),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: VinExistsDto = read_json(resp).await;
    assert!(!body.exists);

    Ok(())
}

/// Expect 200 with `exists: false` for an empty VIN rather than a validation error
#[tokio::test]
async fn validate_returns_false_for_empty_vin() -> Result<(), TestError> {
    let test = TestBuilder::new().with_vin_tables().build().await?;

    let result = validate_vin(State(test.into_app_state()), vin_request("")).await;

    assert!(result.is_ok());
    let body: VinExistsDto = read_json(result.unwrap().into_response()).await;
    assert!(!body.exists);

    Ok(())
}

/// Expect 500 when the VIN table is missing
#[tokio::test]
async fn validate_fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = validate_vin(State(test.into_app_state()), vin_request("A1")).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}

/// Expect 201 with the stored record
#[tokio::test]
async fn insert_returns_created_record() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_vin_tables().build().await?;

    let result = insert_vin(State(test.into_app_state()), vin_request("A1")).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: VinDto = read_json(resp).await;
    assert_eq!(body.vin, "A1");
    assert!(body.id > 0);
    assert_eq!(test.vin().count().await?, 1);

    Ok(())
}

/// Expect 409 when the VIN already exists
#[tokio::test]
async fn insert_rejects_duplicate() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_vin_tables().with_vin("A1").build().await?;

    let result = insert_vin(State(test.into_app_state()), vin_request("A1")).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    assert_eq!(test.vin().count().await?, 1);

    Ok(())
}

/// Expect 400 for an empty VIN and a VIN over 100 characters
#[tokio::test]
async fn insert_rejects_invalid_vin() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_vin_tables().build().await?;

    for vin in ["".to_string(), "X".repeat(101)] {
        let result = insert_vin(State(test.into_app_state()), vin_request(&vin)).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorDto = read_json(resp).await;
        assert!(!body.error.is_empty());
    }
    assert_eq!(test.vin().count().await?, 0);

    Ok(())
}

/// Expect duplicates within the batch to be rejected after the first occurrence
#[tokio::test]
async fn insert_multiple_reports_each_outcome() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_vin_tables().build().await?;

    let payload = vec![
        VinRequest {
            vin: "A1".to_string(),
        },
        VinRequest {
            vin: "A1".to_string(),
        },
        VinRequest {
            vin: "B2".to_string(),
        },
    ];
    let result = insert_multiple_vins(State(test.into_app_state()), Json(payload)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: InsertManyDto = read_json(resp).await;
    let inserted: Vec<&str> = body.inserted.iter().map(|v| v.vin.as_str()).collect();
    assert_eq!(inserted, vec!["A1", "B2"]);
    assert_eq!(body.rejected, vec!["A1".to_string()]);
    assert_eq!(test.vin().count().await?, 2);

    Ok(())
}

/// Expect an empty batch to succeed with empty lists
#[tokio::test]
async fn insert_multiple_accepts_empty_batch() -> Result<(), TestError> {
    let test = TestBuilder::new().with_vin_tables().build().await?;

    let result = insert_multiple_vins(State(test.into_app_state()), Json(Vec::new())).await;

    assert!(result.is_ok());
    let body: InsertManyDto = read_json(result.unwrap().into_response()).await;
    assert!(body.inserted.is_empty());
    assert!(body.rejected.is_empty());

    Ok(())
}

/// Expect 204 on delete, then 404 when deleting the same record again
#[tokio::test]
async fn delete_removes_record_once() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_vin_tables().build().await?;
    let vin_model = test.vin().insert_vin("A1").await?;

    let request = || {
        Json(DeleteVinRequest {
            id: vin_model.id,
            vin: "A1".to_string(),
        })
    };

    let first = delete_vin(State(test.into_app_state()), request()).await;
    assert!(first.is_ok());
    assert_eq!(first.unwrap().into_response().status(), StatusCode::NO_CONTENT);
    assert_eq!(test.vin().count().await?, 0);

    let second = delete_vin(State(test.into_app_state()), request()).await;
    assert!(second.is_err());
    assert_eq!(
        second.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}

/// Expect 404 when the ID exists but the VIN text doesn't match
#[tokio::test]
async fn delete_requires_matching_id_and_vin() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_vin_tables().build().await?;
    let vin_model = test.vin().insert_vin("A1").await?;

    let result = delete_vin(
        State(test.into_app_state()),
        Json(DeleteVinRequest {
            id: vin_model.id,
            vin: "B2".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(test.vin().count().await?, 1);

    Ok(())
}

/// Expect 409 when a warranty registration still references the VIN
#[tokio::test]
async fn delete_refuses_registered_vin() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_vin_tables().build().await?;
    let vin_model = test.vin().insert_vin("A1").await?;
    let owner_model = test.owner().insert_owner("owner@example.com").await?;
    test.registration()
        .insert_registration(
            vin_model.id,
            owner_model.id,
            chrono::NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        )
        .await?;

    let result = delete_vin(
        State(test.into_app_state()),
        Json(DeleteVinRequest {
            id: vin_model.id,
            vin: "A1".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::CONFLICT
    );
    assert_eq!(test.vin().count().await?, 1);
    assert_eq!(test.registration().count().await?, 1);

    Ok(())
}
