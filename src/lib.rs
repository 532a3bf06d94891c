//! Backend de reservas de servicio para vehículos
//!
//! Registro y login de usuarios, vehículos por usuario, catálogo de servicios
//! y reservas con control de conflicto por slot (vehículo, fecha, hora).

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;

use axum::{error_handling::HandleErrorLayer, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use middleware::{cors_layer, handle_timeout_error};
use state::AppState;

/// Router completo con CORS, trazas y límite de tiempo por request
pub fn create_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);
    let request_timeout = state.config.request_timeout;

    routes::create_router()
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_timeout_error))
                .timeout(request_timeout),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
