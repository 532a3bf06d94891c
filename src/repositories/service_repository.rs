use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::service::Service;
use crate::utils::errors::AppResult;

#[async_trait]
pub trait ServiceRepository: Send + Sync {
    async fn list_all(&self) -> AppResult<Vec<Service>>;
}

pub struct PgServiceRepository {
    pool: PgPool,
}

impl PgServiceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ServiceRepository for PgServiceRepository {
    async fn list_all(&self) -> AppResult<Vec<Service>> {
        let services = sqlx::query_as::<_, Service>(
            "SELECT id, service_name, description, price FROM services ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(services)
    }
}
