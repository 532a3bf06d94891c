use axum::{extract::State, routing::post, Json, Router};

use crate::controllers::auth_controller::AuthController;
use crate::dto::auth_dto::{LoginRequest, LoginResponse, RegisterRequest};
use crate::dto::common_dto::MessageResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extractors::ApiJson;

pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

async fn register(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<RegisterRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = AuthController::new(state.users.clone(), state.config.bcrypt_cost);
    let response = controller.register(request).await?;
    Ok(Json(response))
}

async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let controller = AuthController::new(state.users.clone(), state.config.bcrypt_cost);
    let response = controller.login(request).await?;
    Ok(Json(response))
}
