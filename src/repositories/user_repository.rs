use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::user::{NewUser, User};
use crate::utils::errors::{is_unique_violation, AppError, AppResult};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Búsqueda exacta (sensible a mayúsculas)
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    async fn email_exists(&self, email: &str) -> AppResult<bool>;

    /// Falla con `DuplicateUser` si el email ya está registrado.
    async fn create(&self, user: NewUser) -> AppResult<User>;
}

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password, role FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn email_exists(&self, email: &str) -> AppResult<bool> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    async fn create(&self, user: NewUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password, role)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, password, role
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::DuplicateUser
            } else {
                AppError::Database(e)
            }
        })
    }
}
