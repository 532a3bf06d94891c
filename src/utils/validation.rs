//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y conversión de tipos.

use chrono::{NaiveDate, NaiveTime};
use serde::{de, Deserialize, Deserializer};
use validator::ValidationError;

/// Validar y convertir string a fecha (YYYY-MM-DD)
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Validar y convertir string a hora
///
/// Acepta `HH:MM` (lo que envía el selector de horario) y `HH:MM:SS`.
pub fn validate_time(value: &str) -> Result<NaiveTime, ValidationError> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|_| {
            let mut error = ValidationError::new("time");
            error.add_param("value".into(), &value.to_string());
            error.add_param("format".into(), &"HH:MM[:SS]".to_string());
            error
        })
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Number(i64),
    Text(String),
}

/// Deserializar un id que puede llegar como número o como string numérico.
///
/// Los formularios del frontend envían los valores de los `<select>` como strings.
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match IdRepr::deserialize(deserializer)? {
        IdRepr::Number(id) => Ok(id),
        IdRepr::Text(raw) => raw
            .trim()
            .parse::<i64>()
            .map_err(|_| de::Error::custom(format!("invalid id '{}'", raw))),
    }
}
