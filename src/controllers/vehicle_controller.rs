use std::sync::Arc;
use validator::Validate;

use crate::dto::common_dto::MessageResponse;
use crate::dto::vehicle_dto::{CreateVehicleRequest, VehicleResponse};
use crate::models::vehicle::NewVehicle;
use crate::repositories::VehicleRepository;
use crate::utils::errors::AppResult;

pub struct VehicleController {
    repository: Arc<dyn VehicleRepository>,
}

impl VehicleController {
    pub fn new(repository: Arc<dyn VehicleRepository>) -> Self {
        Self { repository }
    }

    /// La matrícula no se comprueba: varios usuarios pueden registrar la misma.
    pub async fn create(&self, request: CreateVehicleRequest) -> AppResult<MessageResponse> {
        request.validate()?;

        let vehicle = self
            .repository
            .create(NewVehicle {
                user_id: request.user_id,
                vehicle_name: request.vehicle_name.trim().to_string(),
                vehicle_model: request.vehicle_model.trim().to_string(),
                vehicle_number: request.vehicle_number.trim().to_string(),
            })
            .await?;

        log::info!("🚗 Vehículo {} registrado para usuario {}", vehicle.id, vehicle.user_id);
        Ok(MessageResponse::new("Vehicle added successfully"))
    }

    pub async fn list_by_user(&self, user_id: i64) -> AppResult<Vec<VehicleResponse>> {
        let vehicles = self.repository.find_by_user(user_id).await?;
        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }
}
