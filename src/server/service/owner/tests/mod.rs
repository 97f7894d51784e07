
use vin_registry_test_utils::prelude::*;

use crate::{
    model::registration::OwnerRequest,
    server::{
        error::{owner::OwnerError, Error},
        service::owner::OwnerService,
    },
};

fn owner_request(email: &str) -> OwnerRequest {
    OwnerRequest {
        email: email.to_string(),
        first_name: Some("Jane".to_string()),
        last_name: Some("Doe".to_string()),
        ..Default::default()
    }
}
