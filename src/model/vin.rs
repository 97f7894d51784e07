use serde::{Deserialize, Serialize};

/// A single VIN submitted for validation or insertion
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct VinRequest {
    #[serde(alias = "vehicle_identification_number")]
    pub vin: String,
}

/// The exact `id` and `vin` pair of a record to delete
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DeleteVinRequest {
    pub id: i32,
    #[serde(alias = "vehicle_identification_number")]
    pub vin: String,
}

/// A stored VIN record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct VinDto {
    pub id: i32,
    pub vin: String,
}

/// Whether a VIN is present in the store
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct VinExistsDto {
    pub exists: bool,
}

/// Outcome of a bulk insert, both lists in request order
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct InsertManyDto {
    pub inserted: Vec<VinDto>,
    pub rejected: Vec<String>,
}

impl From<entity::vehicle_identification_number::Model> for VinDto {
    fn from(model: entity::vehicle_identification_number::Model) -> Self {
        Self {
            id: model.id,
            vin: model.vin,
        }
    }
}
