//! Operaciones de dominio
//!
//! Un controller por caso de uso; cada uno recibe su repositorio al construirse.

pub mod auth_controller;
pub mod booking_controller;
pub mod service_controller;
pub mod vehicle_controller;
