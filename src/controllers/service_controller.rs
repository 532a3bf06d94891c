use std::sync::Arc;

use crate::dto::service_dto::ServiceResponse;
use crate::repositories::ServiceRepository;
use crate::utils::errors::AppResult;

pub struct ServiceController {
    repository: Arc<dyn ServiceRepository>,
}

impl ServiceController {
    pub fn new(repository: Arc<dyn ServiceRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_all(&self) -> AppResult<Vec<ServiceResponse>> {
        let services = self.repository.list_all().await?;
        Ok(services.into_iter().map(ServiceResponse::from).collect())
    }
}
