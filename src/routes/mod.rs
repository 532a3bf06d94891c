//! Rutas HTTP
//!
//! Cada módulo expone un `Router<AppState>`; `create_router` los monta en sus prefijos.

pub mod auth_routes;
pub mod booking_routes;
pub mod service_routes;
pub mod vehicle_routes;

use axum::{routing::get, Json, Router};

use crate::dto::common_dto::MessageResponse;
use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .merge(auth_routes::create_auth_router())
        .nest("/vehicles", vehicle_routes::create_vehicle_router())
        .nest("/services", service_routes::create_service_router())
        .nest("/bookings", booking_routes::create_booking_router())
}

/// Endpoint de vida
async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new(
        "Vehicle service backend is running successfully!",
    ))
}
