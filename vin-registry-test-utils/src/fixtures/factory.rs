//! Factory functions for generating mock database models.
//!
//! These are in-memory model instances that don't require database interaction, suitable
//! for unit tests of model to DTO conversions.

use chrono::Utc;

use crate::model::{OwnerModel, VinModel};

/// Create a mock VIN model.
pub fn mock_vin_model(id: i32, vin: &str) -> VinModel {
    VinModel {
        id,
        vin: vin.to_string(),
    }
}

/// Create a mock owner model with every optional contact attribute populated.
pub fn mock_owner_model(id: i32, email: &str) -> OwnerModel {
    OwnerModel {
        id,
        email: email.to_string(),
        first_name: Some("Test".to_string()),
        last_name: Some("Owner".to_string()),
        address: Some("1 Test Road".to_string()),
        city: Some("Testville".to_string()),
        state: Some("TS".to_string()),
        country: Some("US".to_string()),
        mobile_phone: Some("+15555550100".to_string()),
        created_at: Utc::now().naive_utc(),
    }
}

