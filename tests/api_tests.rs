use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use vehicle_service_booking::{config::EnvironmentConfig, create_app, state::AppState};

// Función helper para crear la app de test sobre el store en memoria
fn create_test_app() -> Router {
    let config = EnvironmentConfig {
        bcrypt_cost: 4,
        ..EnvironmentConfig::default()
    };
    create_app(AppState::in_memory(config))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    let request = match body {
        Some(body) => request.body(Body::from(body.to_string())).unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn register_alice_with_vehicles(app: &Router) {
    let (status, _) = send(
        app,
        Method::POST,
        "/register",
        Some(json!({ "name": "Alice", "email": "a@x.com", "password": "pw1" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    for plate in ["KA01AB1234", "KA01AB9999"] {
        let (status, _) = send(
            app,
            Method::POST,
            "/vehicles",
            Some(json!({
                "user_id": 1,
                "vehicle_name": "Swift",
                "vehicle_model": "VXI",
                "vehicle_number": plate
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }
}

fn booking_body(vehicle_id: Value) -> Value {
    json!({
        "user_id": 1,
        "vehicle_id": vehicle_id,
        "service_id": 1,
        "booking_date": "2025-06-01",
        "booking_time": "10:00"
    })
}

#[tokio::test]
async fn test_root_reports_running() {
    let app = create_test_app();
    let (status, body) = send(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().contains("running"));
}

#[tokio::test]
async fn test_register_and_login_scenario() {
    let app = create_test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/register",
        Some(json!({ "name": "Alice", "email": "a@x.com", "password": "pw1" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "User registered successfully" }));

    let (status, body) = send(
        &app,
        Method::POST,
        "/register",
        Some(json!({ "name": "Alice", "email": "a@x.com", "password": "pw1" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "User already exists");

    let (status, body) = send(
        &app,
        Method::POST,
        "/login",
        Some(json!({ "email": "a@x.com", "password": "pw1" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "message": "Login successful", "user_id": 1, "role": "customer" })
    );
}

#[tokio::test]
async fn test_login_with_wrong_password_is_unauthorized() {
    let app = create_test_app();
    register_alice_with_vehicles(&app).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/login",
        Some(json!({ "email": "a@x.com", "password": "wrong" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_vehicles_are_listed_per_user() {
    let app = create_test_app();
    register_alice_with_vehicles(&app).await;

    let (status, body) = send(&app, Method::GET, "/vehicles/1", None).await;
    assert_eq!(status, StatusCode::OK);
    let vehicles = body.as_array().unwrap();
    assert_eq!(vehicles.len(), 2);
    assert_eq!(vehicles[0]["id"], 1);
    assert_eq!(vehicles[0]["vehicle_number"], "KA01AB1234");
    assert!(vehicles[0]["created_at"].is_string());

    let (status, body) = send(&app, Method::GET, "/vehicles/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_vehicle_for_unknown_user_is_not_found() {
    let app = create_test_app();
    let (status, _) = send(
        &app,
        Method::POST,
        "/vehicles",
        Some(json!({
            "user_id": 9,
            "vehicle_name": "City",
            "vehicle_model": "ZX",
            "vehicle_number": "MH12XY0001"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_service_catalog() {
    let app = create_test_app();
    let (status, body) = send(&app, Method::GET, "/services", None).await;
    assert_eq!(status, StatusCode::OK);
    let services = body.as_array().unwrap();
    assert!(!services.is_empty());
    assert_eq!(services[0]["id"], 1);
    assert!(services[0]["service_name"].is_string());
}

#[tokio::test]
async fn test_booking_slot_conflict_flow() {
    let app = create_test_app();
    register_alice_with_vehicles(&app).await;

    let (status, body) = send(&app, Method::POST, "/bookings", Some(booking_body(json!(1)))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Booking created successfully");
    assert_eq!(body["booking_id"], 1);

    // El frontend envía los ids como strings
    let (status, body) = send(&app, Method::POST, "/bookings", Some(booking_body(json!("1")))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Time slot already booked for this vehicle");

    let (status, _) = send(&app, Method::POST, "/bookings", Some(booking_body(json!(2)))).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, Method::GET, "/bookings/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body[0],
        json!({
            "booking_id": 1,
            "user_id": 1,
            "vehicle_id": 1,
            "service_id": 1,
            "booking_date": "2025-06-01",
            "booking_time": "10:00:00",
            "status": "pending"
        })
    );
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_bookings_for_user_without_bookings_is_empty() {
    let app = create_test_app();
    let (status, body) = send(&app, Method::GET, "/bookings/42", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_status_update_is_reflected_in_listing() {
    let app = create_test_app();
    register_alice_with_vehicles(&app).await;
    send(&app, Method::POST, "/bookings", Some(booking_body(json!(1)))).await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/bookings/status",
        Some(json!({ "booking_id": 1, "status": "on-the-lift" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Booking status updated");

    let (_, body) = send(&app, Method::GET, "/bookings/1", None).await;
    assert_eq!(body[0]["status"], "on-the-lift");
}

#[tokio::test]
async fn test_status_update_for_unknown_booking_is_not_found() {
    let app = create_test_app();
    let (status, body) = send(
        &app,
        Method::PUT,
        "/bookings/status",
        Some(json!({ "booking_id": 77, "status": "confirmed" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_invalid_booking_time_is_bad_request() {
    let app = create_test_app();
    register_alice_with_vehicles(&app).await;

    let mut body = booking_body(json!(1));
    body["booking_time"] = json!("ten o'clock");
    let (status, body) = send(&app, Method::POST, "/bookings", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_booking_with_missing_fields_is_json_bad_request() {
    let app = create_test_app();
    register_alice_with_vehicles(&app).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/bookings",
        Some(json!({ "user_id": 1, "vehicle_id": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
    assert!(body["error"].as_str().unwrap().contains("service_id"));
    assert_eq!(body["error"], body["message"]);
}

#[tokio::test]
async fn test_malformed_json_body_is_json_bad_request() {
    let app = create_test_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/register")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": \"Alice\","))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"], "BAD_REQUEST");
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_non_numeric_user_id_in_path_is_json_bad_request() {
    let app = create_test_app();
    let (status, body) = send(&app, Method::GET, "/vehicles/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
    assert!(body["message"].is_string());
}
