use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::model::vin::VinDto;

/// Owner attributes submitted with a warranty registration
///
/// Only `email` is required; it identifies the owner across registrations.
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct OwnerRequest {
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub mobile_phone: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateRegistrationRequest {
    pub owner: OwnerRequest,
    #[serde(alias = "vehicle_identification_number")]
    pub vin: String,
    pub purchase_date: NaiveDate,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct OwnerDto {
    pub id: i32,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub mobile_phone: Option<String>,
}

/// A warranty registration composed with its VIN and owner
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RegistrationDto {
    pub id: i32,
    pub vin: VinDto,
    pub owner: OwnerDto,
    pub purchase_date: NaiveDate,
    pub registered_at: NaiveDateTime,
}

impl From<entity::trailer_owner::Model> for OwnerDto {
    fn from(model: entity::trailer_owner::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            first_name: model.first_name,
            last_name: model.last_name,
            address: model.address,
            city: model.city,
            state: model.state,
            country: model.country,
            mobile_phone: model.mobile_phone,
        }
    }
}
