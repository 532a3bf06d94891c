//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, extractores,
//! validación y hash de contraseñas.

pub mod errors;
pub mod extractors;
pub mod password;
pub mod validation;
