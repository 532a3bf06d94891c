//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("User already exists")]
    DuplicateUser,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Time slot already booked for this vehicle")]
    SlotConflict,

    #[error("{0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Hash error: {0}")]
    Hash(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Request timed out")]
    Timeout,
}

/// Respuesta de error para la API
///
/// `error` y `message` llevan el mismo texto: los clientes antiguos leen uno u otro.
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

impl ErrorResponse {
    fn new(text: impl Into<String>, code: &'static str) -> Self {
        let text = text.into();
        Self {
            error: text.clone(),
            message: text,
            code,
            details: None,
        }
    }

    fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::DuplicateUser => StatusCode::CONFLICT,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::SlotConflict => StatusCode::BAD_REQUEST,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Timeout => StatusCode::REQUEST_TIMEOUT,
            AppError::Database(_) | AppError::Hash(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            AppError::DuplicateUser => {
                log::warn!("⚠️ Registro rechazado: el usuario ya existe");
                ErrorResponse::new("User already exists", "DUPLICATE_USER")
            }

            AppError::InvalidCredentials => {
                log::warn!("🔒 Credenciales inválidas");
                ErrorResponse::new("Invalid credentials", "INVALID_CREDENTIALS")
            }

            AppError::SlotConflict => {
                log::warn!("📅 Conflicto de horario en reserva");
                ErrorResponse::new("Time slot already booked for this vehicle", "SLOT_CONFLICT")
            }

            AppError::Database(e) => {
                log::error!("❌ Database error: {}", e);
                ErrorResponse::new(e.to_string(), "DB_ERROR")
                    .with_details(json!({ "sql_error": e.to_string() }))
            }

            AppError::Validation(e) => {
                log::warn!("⚠️ Validation error: {}", e);
                ErrorResponse::new("The provided data is invalid", "VALIDATION_ERROR")
                    .with_details(json!(e))
            }

            AppError::NotFound(msg) => {
                log::warn!("🔍 Resource not found: {}", msg);
                ErrorResponse::new(msg, "NOT_FOUND")
            }

            AppError::BadRequest(msg) => {
                log::warn!("⚠️ Bad request: {}", msg);
                ErrorResponse::new(msg, "BAD_REQUEST")
            }

            AppError::Hash(msg) => {
                log::error!("❌ Hash error: {}", msg);
                ErrorResponse::new("An error occurred while processing credentials", "HASH_ERROR")
                    .with_details(json!({ "hash_error": msg }))
            }

            AppError::Internal(msg) => {
                log::error!("❌ Internal error: {}", msg);
                ErrorResponse::new("An unexpected error occurred", "INTERNAL_ERROR")
                    .with_details(json!({ "internal_error": msg }))
            }

            AppError::Timeout => {
                log::warn!("⏱️ Request timed out");
                ErrorResponse::new("Request timed out", "TIMEOUT")
            }
        };

        (status, Json(body)).into_response()
    }
}

// Body o ruta rechazados por axum antes de llegar al controller
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de validación sobre un campo concreto
pub fn validation_error(field: &'static str, error: validator::ValidationError) -> AppError {
    let mut errors = validator::ValidationErrors::new();
    errors.add(field, error);
    AppError::Validation(errors)
}

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: i64) -> AppError {
    AppError::NotFound(format!("{} with id '{}' not found", resource, id))
}

/// ¿El error de sqlx es una violación de restricción UNIQUE?
pub fn is_unique_violation(error: &sqlx::Error) -> bool {
    match error {
        sqlx::Error::Database(db_err) => db_err.is_unique_violation(),
        _ => false,
    }
}

/// ¿El error de sqlx es una violación de FOREIGN KEY?
pub fn is_foreign_key_violation(error: &sqlx::Error) -> bool {
    match error {
        sqlx::Error::Database(db_err) => db_err.is_foreign_key_violation(),
        _ => false,
    }
}
