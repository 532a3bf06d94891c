use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::vehicle::Vehicle;
use crate::utils::validation::{deserialize_id, validate_not_empty};

// Request para registrar un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[serde(deserialize_with = "deserialize_id")]
    pub user_id: i64,

    #[validate(custom = "validate_not_empty")]
    pub vehicle_name: String,

    #[validate(custom = "validate_not_empty")]
    pub vehicle_model: String,

    #[validate(custom = "validate_not_empty")]
    pub vehicle_number: String,
}

// Response de vehículo
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: i64,
    pub user_id: i64,
    pub vehicle_name: String,
    pub vehicle_model: String,
    pub vehicle_number: String,
    pub created_at: String,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            user_id: vehicle.user_id,
            vehicle_name: vehicle.vehicle_name,
            vehicle_model: vehicle.vehicle_model,
            vehicle_number: vehicle.vehicle_number,
            created_at: vehicle.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}
