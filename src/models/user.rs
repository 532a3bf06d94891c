//! Modelo de User
//!
//! Mapea exactamente a la tabla users. La contraseña se guarda siempre como hash bcrypt.

use serde::Serialize;
use sqlx::FromRow;
use std::str::FromStr;

/// Rol del usuario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Customer,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Customer => "customer",
            UserRole::Admin => "admin",
        }
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "customer" => Ok(UserRole::Customer),
            "admin" => Ok(UserRole::Admin),
            other => Err(format!("unknown role '{}'", other)),
        }
    }
}

/// User - mapea a la tabla users
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Hash bcrypt, nunca la contraseña en claro
    pub password: String,
    pub role: String,
}

/// Datos para insertar un usuario nuevo
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
}
