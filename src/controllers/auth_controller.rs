use std::sync::Arc;
use validator::Validate;

use crate::dto::auth_dto::{LoginRequest, LoginResponse, RegisterRequest};
use crate::dto::common_dto::MessageResponse;
use crate::models::user::{NewUser, UserRole};
use crate::repositories::UserRepository;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::password::{hash_password, verify_password};

pub struct AuthController {
    repository: Arc<dyn UserRepository>,
    bcrypt_cost: u32,
}

impl AuthController {
    pub fn new(repository: Arc<dyn UserRepository>, bcrypt_cost: u32) -> Self {
        Self {
            repository,
            bcrypt_cost,
        }
    }

    pub async fn register(&self, request: RegisterRequest) -> AppResult<MessageResponse> {
        request.validate()?;

        // Verificar que el email no exista (comparación exacta)
        if self.repository.email_exists(&request.email).await? {
            return Err(AppError::DuplicateUser);
        }

        let password_hash = hash_password(request.password, self.bcrypt_cost).await?;

        // Un registro concurrente con el mismo email lo rechaza el índice UNIQUE
        let user = self
            .repository
            .create(NewUser {
                name: request.name,
                email: request.email,
                password_hash,
                role: UserRole::default(),
            })
            .await?;

        log::info!("👤 Usuario {} registrado", user.id);
        Ok(MessageResponse::new("User registered successfully"))
    }

    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        let user = self
            .repository
            .find_by_email(&request.email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !verify_password(request.password, user.password).await? {
            return Err(AppError::InvalidCredentials);
        }

        let role = user.role.parse::<UserRole>().map_err(AppError::Internal)?;

        log::info!("🔑 Login correcto para usuario {} ({})", user.id, role.as_str());
        Ok(LoginResponse::success(user.id, role))
    }
}
