//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle. Mapea a la tabla vehicles;
//! `created_at` lo asigna el servidor.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, FromRow)]
pub struct Vehicle {
    pub id: i64,
    pub user_id: i64,
    pub vehicle_name: String,
    pub vehicle_model: String,
    /// Matrícula. No es única: varios usuarios pueden registrar la misma.
    pub vehicle_number: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewVehicle {
    pub user_id: i64,
    pub vehicle_name: String,
    pub vehicle_model: String,
    pub vehicle_number: String,
}
