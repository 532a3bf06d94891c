use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::user::UserRole;

// Request de registro
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// Login response: sin token, la sesión la gestiona el cliente
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub user_id: i64,
    pub role: UserRole,
}

impl LoginResponse {
    pub fn success(user_id: i64, role: UserRole) -> Self {
        Self {
            message: "Login successful".to_string(),
            user_id,
            role,
        }
    }
}
