//! Almacenamiento en memoria
//!
//! Implementa los cuatro repositorios sobre tablas en memoria con la misma
//! semántica que PostgreSQL: email único, claves foráneas y slot exclusivo.
//! Cada operación se ejecuta bajo un único lock de escritura, así que la
//! comprobación del slot y el insert son atómicos.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::models::booking::{Booking, BookingSlot, BookingStatus, NewBooking};
use crate::models::service::{default_catalog, Service};
use crate::models::user::{NewUser, User};
use crate::models::vehicle::{NewVehicle, Vehicle};
use crate::repositories::{BookingRepository, ServiceRepository, UserRepository, VehicleRepository};
use crate::utils::errors::{not_found_error, AppError, AppResult};

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    vehicles: Vec<Vehicle>,
    services: Vec<Service>,
    bookings: Vec<Booking>,
}

impl Tables {
    fn active_in_slot(&self, slot: &BookingSlot, except: Option<i64>) -> Option<&Booking> {
        self.bookings.iter().find(|b| {
            Some(b.booking_id) != except && b.occupies_slot() && b.slot() == *slot
        })
    }
}

/// Ids secuenciales empezando en 1, como BIGSERIAL
fn next_id(len: usize) -> i64 {
    len as i64 + 1
}

pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    /// Store vacío con el catálogo de servicios por defecto
    pub fn new() -> Self {
        Self::with_services(default_catalog())
    }

    pub fn with_services(services: Vec<Service>) -> Self {
        Self {
            tables: RwLock::new(Tables {
                services,
                ..Tables::default()
            }),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.email == email).cloned())
    }

    async fn email_exists(&self, email: &str) -> AppResult<bool> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().any(|u| u.email == email))
    }

    async fn create(&self, user: NewUser) -> AppResult<User> {
        let mut tables = self.tables.write().await;
        if tables.users.iter().any(|u| u.email == user.email) {
            return Err(AppError::DuplicateUser);
        }

        let user = User {
            id: next_id(tables.users.len()),
            name: user.name,
            email: user.email,
            password: user.password_hash,
            role: user.role.as_str().to_string(),
        };
        tables.users.push(user.clone());
        Ok(user)
    }
}

#[async_trait]
impl VehicleRepository for InMemoryStore {
    async fn create(&self, vehicle: NewVehicle) -> AppResult<Vehicle> {
        let mut tables = self.tables.write().await;
        if !tables.users.iter().any(|u| u.id == vehicle.user_id) {
            return Err(not_found_error("User", vehicle.user_id));
        }

        let vehicle = Vehicle {
            id: next_id(tables.vehicles.len()),
            user_id: vehicle.user_id,
            vehicle_name: vehicle.vehicle_name,
            vehicle_model: vehicle.vehicle_model,
            vehicle_number: vehicle.vehicle_number,
            created_at: Utc::now(),
        };
        tables.vehicles.push(vehicle.clone());
        Ok(vehicle)
    }

    async fn find_by_user(&self, user_id: i64) -> AppResult<Vec<Vehicle>> {
        let tables = self.tables.read().await;
        Ok(tables
            .vehicles
            .iter()
            .filter(|v| v.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ServiceRepository for InMemoryStore {
    async fn list_all(&self) -> AppResult<Vec<Service>> {
        let tables = self.tables.read().await;
        Ok(tables.services.clone())
    }
}

#[async_trait]
impl BookingRepository for InMemoryStore {
    async fn find_active_in_slot(&self, slot: &BookingSlot) -> AppResult<Option<Booking>> {
        let tables = self.tables.read().await;
        Ok(tables.active_in_slot(slot, None).cloned())
    }

    async fn create(&self, booking: NewBooking) -> AppResult<Booking> {
        let mut tables = self.tables.write().await;

        let references_exist = tables.users.iter().any(|u| u.id == booking.user_id)
            && tables.vehicles.iter().any(|v| v.id == booking.slot.vehicle_id)
            && tables.services.iter().any(|s| s.id == booking.service_id);
        if !references_exist {
            return Err(AppError::NotFound(
                "Referenced user, vehicle or service not found".to_string(),
            ));
        }

        if tables.active_in_slot(&booking.slot, None).is_some() {
            return Err(AppError::SlotConflict);
        }

        let booking = Booking {
            booking_id: next_id(tables.bookings.len()),
            user_id: booking.user_id,
            vehicle_id: booking.slot.vehicle_id,
            service_id: booking.service_id,
            booking_date: booking.slot.booking_date,
            booking_time: booking.slot.booking_time,
            status: Some(BookingStatus::Pending.as_str().to_string()),
        };
        tables.bookings.push(booking.clone());
        Ok(booking)
    }

    async fn find_by_user(&self, user_id: i64) -> AppResult<Vec<Booking>> {
        let tables = self.tables.read().await;
        Ok(tables
            .bookings
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn update_status(&self, booking_id: i64, status: &str) -> AppResult<u64> {
        let mut tables = self.tables.write().await;
        let Some(index) = tables.bookings.iter().position(|b| b.booking_id == booking_id) else {
            return Ok(0);
        };

        let reactivates = status != BookingStatus::Cancelled.as_str();
        let slot = tables.bookings[index].slot();
        if reactivates && tables.active_in_slot(&slot, Some(booking_id)).is_some() {
            return Err(AppError::SlotConflict);
        }

        tables.bookings[index].status = Some(status.to_string());
        Ok(1)
    }
}
