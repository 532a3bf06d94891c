//! DTOs de la API
//!
//! Formas de request/response en JSON, separadas de los modelos de base de datos.

pub mod auth_dto;
pub mod booking_dto;
pub mod common_dto;
pub mod service_dto;
pub mod vehicle_dto;
