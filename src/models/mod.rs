//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean
//! al schema PostgreSQL (users, vehicles, services, bookings).

pub mod booking;
pub mod service;
pub mod user;
pub mod vehicle;
