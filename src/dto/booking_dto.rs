use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::booking::Booking;
use crate::utils::validation::{deserialize_id, validate_not_empty};

// Request para crear una reserva. Fecha y hora llegan como texto y se
// validan en el controller.
#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    #[serde(deserialize_with = "deserialize_id")]
    pub user_id: i64,
    #[serde(deserialize_with = "deserialize_id")]
    pub vehicle_id: i64,
    #[serde(deserialize_with = "deserialize_id")]
    pub service_id: i64,
    pub booking_date: String,
    pub booking_time: String,
}

#[derive(Debug, Serialize)]
pub struct BookingCreatedResponse {
    pub message: String,
    pub booking_id: i64,
}

// Request para cambiar el estado de una reserva
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateBookingStatusRequest {
    #[serde(deserialize_with = "deserialize_id")]
    pub booking_id: i64,

    #[validate(custom = "validate_not_empty")]
    pub status: String,
}

// Response de reserva
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub booking_id: i64,
    pub user_id: i64,
    pub vehicle_id: i64,
    pub service_id: i64,
    pub booking_date: String,
    pub booking_time: String,
    pub status: String,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        let status = booking.effective_status().to_string();
        Self {
            booking_id: booking.booking_id,
            user_id: booking.user_id,
            vehicle_id: booking.vehicle_id,
            service_id: booking.service_id,
            booking_date: booking.booking_date.format("%Y-%m-%d").to_string(),
            booking_time: booking.booking_time.format("%H:%M:%S").to_string(),
            status,
        }
    }
}
