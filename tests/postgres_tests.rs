//! Tests contra PostgreSQL real
//!
//! Necesitan `DATABASE_URL`; sin ella cada test termina sin hacer nada.
//! Cada test crea su propio usuario y vehículo, así que pueden correr en
//! paralelo sobre la misma base.

use chrono::{NaiveDate, NaiveTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use vehicle_service_booking::{
    config::database::DatabaseConfig,
    database::DatabaseConnection,
    models::{
        booking::{BookingSlot, NewBooking},
        user::{NewUser, UserRole},
        vehicle::NewVehicle,
    },
    repositories::{
        BookingRepository, PgBookingRepository, PgServiceRepository, PgUserRepository,
        PgVehicleRepository, ServiceRepository, UserRepository, VehicleRepository,
    },
    utils::errors::AppError,
};

async fn setup_test_database() -> Option<PgPool> {
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("⏭️ DATABASE_URL no definida, se omite el test de PostgreSQL");
        return None;
    };

    let config = DatabaseConfig {
        max_connections: 4,
        ..DatabaseConfig::new(url)
    };
    let db = DatabaseConnection::connect(&config)
        .await
        .expect("Failed to connect to test database");
    db.run_migrations().await.expect("Failed to run migrations");

    Some(db.pool().clone())
}

struct Fixture {
    user_id: i64,
    vehicle_id: i64,
    service_id: i64,
}

// Usuario y vehículo nuevos por test; el email lleva un sufijo único
async fn create_fixture(pool: &PgPool, label: &str) -> Fixture {
    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
    let user = PgUserRepository::new(pool.clone())
        .create(NewUser {
            name: "Test".to_string(),
            email: format!("{}-{}@test.local", label, nanos),
            password_hash: "hash".to_string(),
            role: UserRole::Customer,
        })
        .await
        .unwrap();

    let vehicle = PgVehicleRepository::new(pool.clone())
        .create(NewVehicle {
            user_id: user.id,
            vehicle_name: "Swift".to_string(),
            vehicle_model: "VXI".to_string(),
            vehicle_number: format!("KA01-{}", nanos % 10_000),
        })
        .await
        .unwrap();

    let services = PgServiceRepository::new(pool.clone()).list_all().await.unwrap();

    Fixture {
        user_id: user.id,
        vehicle_id: vehicle.id,
        service_id: services[0].id,
    }
}

fn new_booking(fixture: &Fixture) -> NewBooking {
    NewBooking {
        user_id: fixture.user_id,
        service_id: fixture.service_id,
        slot: BookingSlot {
            vehicle_id: fixture.vehicle_id,
            booking_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            booking_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        },
    }
}

#[tokio::test]
async fn test_second_insert_on_active_slot_is_conflict() {
    let Some(pool) = setup_test_database().await else {
        return;
    };
    let fixture = create_fixture(&pool, "insert").await;
    let repository = PgBookingRepository::new(pool.clone());

    let first = repository.create(new_booking(&fixture)).await.unwrap();
    assert_eq!(first.status.as_deref(), Some("pending"));

    // Sin pre-check: el índice parcial rechaza el segundo insert
    let second = repository.create(new_booking(&fixture)).await;
    assert!(matches!(second, Err(AppError::SlotConflict)));
}

#[tokio::test]
async fn test_concurrent_inserts_on_one_slot_have_one_winner() {
    let Some(pool) = setup_test_database().await else {
        return;
    };
    let fixture = Arc::new(create_fixture(&pool, "race").await);
    let repository = Arc::new(PgBookingRepository::new(pool.clone()));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let repository = repository.clone();
        let fixture = fixture.clone();
        handles.push(tokio::spawn(async move {
            repository.create(new_booking(&fixture)).await
        }));
    }

    let mut created = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => created += 1,
            Err(AppError::SlotConflict) => conflicts += 1,
            Err(other) => panic!("unexpected error: {}", other),
        }
    }
    assert_eq!(created, 1);
    assert_eq!(conflicts, 7);
}

#[tokio::test]
async fn test_cancelled_booking_frees_slot_but_cannot_be_reactivated() {
    let Some(pool) = setup_test_database().await else {
        return;
    };
    let fixture = create_fixture(&pool, "cancel").await;
    let repository = PgBookingRepository::new(pool.clone());

    let original = repository.create(new_booking(&fixture)).await.unwrap();
    let affected = repository
        .update_status(original.booking_id, "cancelled")
        .await
        .unwrap();
    assert_eq!(affected, 1);

    let slot = new_booking(&fixture).slot;
    assert!(repository.find_active_in_slot(&slot).await.unwrap().is_none());

    let rebooked = repository.create(new_booking(&fixture)).await.unwrap();
    assert_ne!(rebooked.booking_id, original.booking_id);

    let reactivated = repository
        .update_status(original.booking_id, "confirmed")
        .await;
    assert!(matches!(reactivated, Err(AppError::SlotConflict)));
}

#[tokio::test]
async fn test_unknown_references_are_not_found() {
    let Some(pool) = setup_test_database().await else {
        return;
    };
    let fixture = create_fixture(&pool, "fk").await;
    let repository = PgBookingRepository::new(pool.clone());

    let mut booking = new_booking(&fixture);
    booking.service_id = i64::MAX;
    let result = repository.create(booking).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    let unknown = repository.update_status(i64::MAX, "confirmed").await.unwrap();
    assert_eq!(unknown, 0);
}
