//! Persistencia de reservas
//!
//! La exclusividad del slot la garantiza el índice parcial
//! `bookings_active_slot_idx`; `create` traduce su violación a `SlotConflict`,
//! de modo que dos inserts concurrentes para el mismo slot no pueden ganar ambos.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::booking::{Booking, BookingSlot, NewBooking};
use crate::utils::errors::{is_foreign_key_violation, is_unique_violation, AppError, AppResult};

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Reserva no cancelada que ocupa el slot, si existe.
    async fn find_active_in_slot(&self, slot: &BookingSlot) -> AppResult<Option<Booking>>;

    /// Inserta con estado `pending`. Falla con `SlotConflict` si el slot ya está ocupado.
    async fn create(&self, booking: NewBooking) -> AppResult<Booking>;

    async fn find_by_user(&self, user_id: i64) -> AppResult<Vec<Booking>>;

    /// Devuelve el número de filas afectadas.
    async fn update_status(&self, booking_id: i64, status: &str) -> AppResult<u64>;
}

pub struct PgBookingRepository {
    pool: PgPool,
}

impl PgBookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for PgBookingRepository {
    async fn find_active_in_slot(&self, slot: &BookingSlot) -> AppResult<Option<Booking>> {
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            SELECT booking_id, user_id, vehicle_id, service_id, booking_date, booking_time, status
            FROM bookings
            WHERE vehicle_id = $1
              AND booking_date = $2
              AND booking_time = $3
              AND COALESCE(status, 'pending') <> 'cancelled'
            LIMIT 1
            "#,
        )
        .bind(slot.vehicle_id)
        .bind(slot.booking_date)
        .bind(slot.booking_time)
        .fetch_optional(&self.pool)
        .await?;

        Ok(booking)
    }

    async fn create(&self, booking: NewBooking) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (user_id, vehicle_id, service_id, booking_date, booking_time, status)
            VALUES ($1, $2, $3, $4, $5, 'pending')
            RETURNING booking_id, user_id, vehicle_id, service_id, booking_date, booking_time, status
            "#,
        )
        .bind(booking.user_id)
        .bind(booking.slot.vehicle_id)
        .bind(booking.service_id)
        .bind(booking.slot.booking_date)
        .bind(booking.slot.booking_time)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                log::warn!(
                    "📅 Insert concurrente rechazado para vehículo {} el {} a las {}",
                    booking.slot.vehicle_id,
                    booking.slot.booking_date,
                    booking.slot.booking_time
                );
                AppError::SlotConflict
            } else if is_foreign_key_violation(&e) {
                AppError::NotFound("Referenced user, vehicle or service not found".to_string())
            } else {
                AppError::Database(e)
            }
        })
    }

    async fn find_by_user(&self, user_id: i64) -> AppResult<Vec<Booking>> {
        let bookings = sqlx::query_as::<_, Booking>(
            r#"
            SELECT booking_id, user_id, vehicle_id, service_id, booking_date, booking_time, status
            FROM bookings
            WHERE user_id = $1
            ORDER BY booking_id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }

    async fn update_status(&self, booking_id: i64, status: &str) -> AppResult<u64> {
        let result = sqlx::query("UPDATE bookings SET status = $1 WHERE booking_id = $2")
            .bind(status)
            .bind(booking_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                // Reactivar una reserva cancelada puede chocar con otra ya activa en el slot
                if is_unique_violation(&e) {
                    AppError::SlotConflict
                } else {
                    AppError::Database(e)
                }
            })?;

        Ok(result.rows_affected())
    }
}
