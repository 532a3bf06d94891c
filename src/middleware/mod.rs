//! Middleware del sistema
//!
//! CORS y límite de tiempo por request.

pub mod cors;
pub mod timeout;

pub use cors::*;
pub use timeout::*;
