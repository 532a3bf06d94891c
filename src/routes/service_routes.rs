use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::service_controller::ServiceController;
use crate::dto::service_dto::ServiceResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_service_router() -> Router<AppState> {
    Router::new().route("/", get(list_services))
}

async fn list_services(
    State(state): State<AppState>,
) -> Result<Json<Vec<ServiceResponse>>, AppError> {
    let controller = ServiceController::new(state.services.clone());
    let response = controller.list_all().await?;
    Ok(Json(response))
}
