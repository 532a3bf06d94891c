use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::common_dto::MessageResponse;
use crate::dto::vehicle_dto::{CreateVehicleRequest, VehicleResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extractors::{ApiJson, ApiPath};

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_vehicle))
        .route("/:user_id", get(list_vehicles))
}

async fn create_vehicle(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateVehicleRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let controller = VehicleController::new(state.vehicles.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_vehicles(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i64>,
) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.vehicles.clone());
    let response = controller.list_by_user(user_id).await?;
    Ok(Json(response))
}
