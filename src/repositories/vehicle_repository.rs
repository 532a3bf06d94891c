use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::vehicle::{NewVehicle, Vehicle};
use crate::utils::errors::{is_foreign_key_violation, not_found_error, AppError, AppResult};

#[async_trait]
pub trait VehicleRepository: Send + Sync {
    /// Falla con `NotFound` si el usuario no existe.
    async fn create(&self, vehicle: NewVehicle) -> AppResult<Vehicle>;

    async fn find_by_user(&self, user_id: i64) -> AppResult<Vec<Vehicle>>;
}

pub struct PgVehicleRepository {
    pool: PgPool,
}

impl PgVehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VehicleRepository for PgVehicleRepository {
    async fn create(&self, vehicle: NewVehicle) -> AppResult<Vehicle> {
        sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (user_id, vehicle_name, vehicle_model, vehicle_number, created_at)
            VALUES ($1, $2, $3, $4, NOW())
            RETURNING id, user_id, vehicle_name, vehicle_model, vehicle_number, created_at
            "#,
        )
        .bind(vehicle.user_id)
        .bind(&vehicle.vehicle_name)
        .bind(&vehicle.vehicle_model)
        .bind(&vehicle.vehicle_number)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                not_found_error("User", vehicle.user_id)
            } else {
                AppError::Database(e)
            }
        })
    }

    async fn find_by_user(&self, user_id: i64) -> AppResult<Vec<Vehicle>> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            r#"
            SELECT id, user_id, vehicle_name, vehicle_model, vehicle_number, created_at
            FROM vehicles
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }
}
