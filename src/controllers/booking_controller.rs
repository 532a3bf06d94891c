//! Reservas de servicio
//!
//! La creación comprueba primero si el slot (vehículo, fecha, hora) está ocupado
//! para devolver un error claro, y después inserta. El repositorio vuelve a
//! imponer la exclusividad en el insert, así que una carrera entre dos requests
//! termina igualmente en `SlotConflict` para la segunda.

use std::sync::Arc;
use validator::Validate;

use crate::dto::booking_dto::{
    BookingCreatedResponse, BookingResponse, CreateBookingRequest, UpdateBookingStatusRequest,
};
use crate::dto::common_dto::MessageResponse;
use crate::models::booking::{BookingSlot, BookingStatus, NewBooking};
use crate::repositories::BookingRepository;
use crate::utils::errors::{not_found_error, validation_error, AppError, AppResult};
use crate::utils::validation::{validate_date, validate_time};

pub struct BookingController {
    repository: Arc<dyn BookingRepository>,
    strict_status: bool,
}

impl BookingController {
    pub fn new(repository: Arc<dyn BookingRepository>, strict_status: bool) -> Self {
        Self {
            repository,
            strict_status,
        }
    }

    pub async fn create(&self, request: CreateBookingRequest) -> AppResult<BookingCreatedResponse> {
        let booking_date = validate_date(&request.booking_date)
            .map_err(|e| validation_error("booking_date", e))?;
        let booking_time = validate_time(&request.booking_time)
            .map_err(|e| validation_error("booking_time", e))?;
        let slot = BookingSlot {
            vehicle_id: request.vehicle_id,
            booking_date,
            booking_time,
        };

        // El conflicto ignora al usuario: un vehículo sólo puede estar en un slot a la vez
        if let Some(existing) = self.repository.find_active_in_slot(&slot).await? {
            log::warn!(
                "📅 Slot ocupado por la reserva {} (vehículo {}, {} {})",
                existing.booking_id,
                slot.vehicle_id,
                slot.booking_date,
                slot.booking_time
            );
            return Err(AppError::SlotConflict);
        }

        let booking = self
            .repository
            .create(NewBooking {
                user_id: request.user_id,
                service_id: request.service_id,
                slot,
            })
            .await?;

        log::info!(
            "✅ Reserva {} creada: vehículo {} el {} a las {}",
            booking.booking_id,
            booking.vehicle_id,
            booking.booking_date,
            booking.booking_time
        );
        Ok(BookingCreatedResponse {
            message: "Booking created successfully".to_string(),
            booking_id: booking.booking_id,
        })
    }

    pub async fn list_by_user(&self, user_id: i64) -> AppResult<Vec<BookingResponse>> {
        let bookings = self.repository.find_by_user(user_id).await?;
        Ok(bookings.into_iter().map(BookingResponse::from).collect())
    }

    /// Sin modo estricto el estado es texto libre.
    pub async fn update_status(&self, request: UpdateBookingStatusRequest) -> AppResult<MessageResponse> {
        request.validate()?;
        let status = request.status.trim();

        if self.strict_status {
            status
                .parse::<BookingStatus>()
                .map_err(AppError::BadRequest)?;
        }

        let affected = self.repository.update_status(request.booking_id, status).await?;
        if affected == 0 {
            return Err(not_found_error("Booking", request.booking_id));
        }

        log::info!("🔄 Reserva {} → {}", request.booking_id, status);
        Ok(MessageResponse::new("Booking status updated"))
    }
}
