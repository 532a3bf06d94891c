//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.
//! Todas las variables son opcionales; un valor presente pero inválido es un error
//! de arranque.

use anyhow::{anyhow, Context, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;
use tracing::Level;

/// Backend de persistencia
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StorageBackend::Postgres),
            "memory" | "in-memory" => Ok(StorageBackend::Memory),
            other => Err(anyhow!("unknown storage backend '{}'", other)),
        }
    }
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub storage: StorageBackend,
    pub cors_origins: Vec<String>,
    pub bcrypt_cost: u32,
    pub strict_booking_status: bool,
    pub request_timeout: Duration,
    pub run_migrations: bool,
    pub log_level: Level,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            host: "0.0.0.0".to_string(),
            port: 5000,
            storage: StorageBackend::Postgres,
            cors_origins: Vec::new(),
            bcrypt_cost: bcrypt::DEFAULT_COST,
            strict_booking_status: false,
            request_timeout: Duration::from_secs(30),
            run_migrations: true,
            log_level: Level::INFO,
        }
    }
}

impl EnvironmentConfig {
    /// Construir la configuración a partir de las variables de entorno
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            host: env::var("HOST").unwrap_or(defaults.host),
            port: parse_var("PORT")?.unwrap_or(defaults.port),
            storage: parse_var("STORAGE")?.unwrap_or(defaults.storage),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|raw| parse_origins(&raw))
                .unwrap_or(defaults.cors_origins),
            bcrypt_cost: parse_var("BCRYPT_COST")?.unwrap_or(defaults.bcrypt_cost),
            strict_booking_status: parse_flag("STRICT_BOOKING_STATUS")?
                .unwrap_or(defaults.strict_booking_status),
            request_timeout: parse_var::<u64>("REQUEST_TIMEOUT_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
            run_migrations: parse_flag("RUN_MIGRATIONS")?.unwrap_or(defaults.run_migrations),
            log_level: parse_var("LOG_LEVEL")?.unwrap_or(defaults.log_level),
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Leer y parsear una variable opcional
pub(crate) fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| anyhow!("{}", e))
            .with_context(|| format!("{} has an invalid value '{}'", name, raw)),
        Err(_) => Ok(None),
    }
}

fn parse_flag(name: &str) -> Result<Option<bool>> {
    match env::var(name) {
        Ok(raw) => parse_bool(&raw)
            .map(Some)
            .with_context(|| format!("{} must be a boolean", name)),
        Err(_) => Ok(None),
    }
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(anyhow!("'{}' is not a boolean", other)),
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_backend_parse() {
        assert_eq!("postgres".parse::<StorageBackend>().unwrap(), StorageBackend::Postgres);
        assert_eq!(" Memory ".parse::<StorageBackend>().unwrap(), StorageBackend::Memory);
        assert!("mysql".parse::<StorageBackend>().is_err());
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("TRUE").unwrap());
        assert!(!parse_bool("0").unwrap());
        assert!(parse_bool("maybe").is_err());
    }

    #[test]
    fn test_parse_origins_skips_blanks() {
        let origins = parse_origins("http://localhost:5173, ,http://127.0.0.1:3000");
        assert_eq!(origins, vec!["http://localhost:5173", "http://127.0.0.1:3000"]);
    }

    #[test]
    fn test_defaults() {
        let config = EnvironmentConfig::default();
        assert!(config.is_development());
        assert_eq!(config.server_url(), "0.0.0.0:5000");
        assert!(!config.strict_booking_status);
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    fn test_log_level_is_parsed_strictly() {
        env::set_var("VSB_TEST_LOG_LEVEL_OK", "debug");
        env::set_var("VSB_TEST_LOG_LEVEL_BAD", "loud");

        let ok = parse_var::<Level>("VSB_TEST_LOG_LEVEL_OK").unwrap();
        assert_eq!(ok, Some(Level::DEBUG));

        let bad = parse_var::<Level>("VSB_TEST_LOG_LEVEL_BAD");
        assert!(bad.is_err());
        assert!(format!("{:#}", bad.unwrap_err()).contains("VSB_TEST_LOG_LEVEL_BAD"));

        assert_eq!(parse_var::<Level>("VSB_TEST_LOG_LEVEL_UNSET").unwrap(), None);
    }
}
