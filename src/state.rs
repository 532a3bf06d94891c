//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. No hay estado mutable propio: sólo los
//! handles de los repositorios y la configuración.

use sqlx::PgPool;
use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::{
    BookingRepository, InMemoryStore, PgBookingRepository, PgServiceRepository,
    PgUserRepository, PgVehicleRepository, ServiceRepository, UserRepository, VehicleRepository,
};

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub users: Arc<dyn UserRepository>,
    pub vehicles: Arc<dyn VehicleRepository>,
    pub services: Arc<dyn ServiceRepository>,
    pub bookings: Arc<dyn BookingRepository>,
}

impl AppState {
    /// Estado respaldado por PostgreSQL
    pub fn postgres(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self {
            config,
            users: Arc::new(PgUserRepository::new(pool.clone())),
            vehicles: Arc::new(PgVehicleRepository::new(pool.clone())),
            services: Arc::new(PgServiceRepository::new(pool.clone())),
            bookings: Arc::new(PgBookingRepository::new(pool)),
        }
    }

    /// Estado en memoria: las cuatro tablas comparten un mismo store
    pub fn in_memory(config: EnvironmentConfig) -> Self {
        let store = Arc::new(InMemoryStore::new());
        Self {
            config,
            users: store.clone(),
            vehicles: store.clone(),
            services: store.clone(),
            bookings: store,
        }
    }
}
