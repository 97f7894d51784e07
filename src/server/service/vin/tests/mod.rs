
use vin_registry_test_utils::prelude::*;

use crate::server::{
    error::{vin::VinError, Error},
    service::vin::VinService,
};
