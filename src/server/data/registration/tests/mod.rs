
use chrono::NaiveDate;
use vin_registry_test_utils::prelude::*;

use crate::server::data::registration::RegistrationRepository;

fn purchase_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}
