use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::service::Service;

// Response de servicio del catálogo
#[derive(Debug, Serialize)]
pub struct ServiceResponse {
    pub id: i64,
    pub service_name: String,
    pub description: Option<String>,
    pub price: Option<Decimal>,
}

impl From<Service> for ServiceResponse {
    fn from(service: Service) -> Self {
        Self {
            id: service.id,
            service_name: service.service_name,
            description: service.description,
            price: service.price,
        }
    }
}
