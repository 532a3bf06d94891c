//! Modelo de Booking
//!
//! Una reserva ocupa un slot (vehículo, fecha, hora). El estado se guarda como
//! texto libre: los valores conocidos están en [`BookingStatus`], pero la
//! actualización de estado acepta cualquier string salvo en modo estricto.

use chrono::{NaiveDate, NaiveTime};
use sqlx::FromRow;
use std::str::FromStr;

/// Estados conocidos de una reserva
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    InProgress,
    Cancelled,
    Completed,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::InProgress => "in_progress",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Completed => "completed",
        }
    }
}

impl FromStr for BookingStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(BookingStatus::Pending),
            "confirmed" => Ok(BookingStatus::Confirmed),
            "in_progress" => Ok(BookingStatus::InProgress),
            "cancelled" => Ok(BookingStatus::Cancelled),
            "completed" => Ok(BookingStatus::Completed),
            other => Err(format!("unknown booking status '{}'", other)),
        }
    }
}

/// Booking - mapea a la tabla bookings
#[derive(Debug, Clone, FromRow)]
pub struct Booking {
    pub booking_id: i64,
    pub user_id: i64,
    pub vehicle_id: i64,
    pub service_id: i64,
    pub booking_date: NaiveDate,
    pub booking_time: NaiveTime,
    /// NULL en filas antiguas
    pub status: Option<String>,
}

impl Booking {
    /// Estado efectivo: las filas sin estado cuentan como `pending`.
    pub fn effective_status(&self) -> &str {
        self.status
            .as_deref()
            .unwrap_or(BookingStatus::Pending.as_str())
    }

    /// Una reserva cancelada ya no ocupa su slot.
    pub fn occupies_slot(&self) -> bool {
        self.effective_status() != BookingStatus::Cancelled.as_str()
    }

    pub fn slot(&self) -> BookingSlot {
        BookingSlot {
            vehicle_id: self.vehicle_id,
            booking_date: self.booking_date,
            booking_time: self.booking_time,
        }
    }
}

/// Unidad de ocupación exclusiva: un vehículo en una fecha y hora.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookingSlot {
    pub vehicle_id: i64,
    pub booking_date: NaiveDate,
    pub booking_time: NaiveTime,
}

#[derive(Debug, Clone)]
pub struct NewBooking {
    pub user_id: i64,
    pub service_id: i64,
    pub slot: BookingSlot,
}
