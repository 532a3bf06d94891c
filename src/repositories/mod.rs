//! Capa de persistencia
//!
//! Un repositorio por tabla. Cada uno es un trait para que los controllers
//! reciban el store como dependencia explícita: PostgreSQL en producción,
//! [`memory::InMemoryStore`] en tests y en modo `STORAGE=memory`.

pub mod booking_repository;
pub mod memory;
pub mod service_repository;
pub mod user_repository;
pub mod vehicle_repository;

pub use booking_repository::{BookingRepository, PgBookingRepository};
pub use memory::InMemoryStore;
pub use service_repository::{PgServiceRepository, ServiceRepository};
pub use user_repository::{PgUserRepository, UserRepository};
pub use vehicle_repository::{PgVehicleRepository, VehicleRepository};
