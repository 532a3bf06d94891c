//! Catálogo de servicios (sólo lectura)

use rust_decimal::Decimal;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Service {
    pub id: i64,
    pub service_name: String,
    pub description: Option<String>,
    pub price: Option<Decimal>,
}

/// Catálogo inicial; coincide con el seed de la migración inicial.
pub fn default_catalog() -> Vec<Service> {
    [
        ("General Service", "Full inspection, fluid top-up and filter replacement", 249_900),
        ("Oil Change", "Engine oil and oil filter replacement", 79_900),
        ("Car Wash", "Exterior wash and interior vacuum", 39_900),
        ("Brake Inspection", "Pad, disc and brake fluid check", 59_900),
        ("Wheel Alignment", "Four-wheel alignment and balancing", 69_900),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, description, cents), id)| Service {
        id,
        service_name: name.to_string(),
        description: Some(description.to_string()),
        price: Some(Decimal::new(cents, 2)),
    })
    .collect()
}
