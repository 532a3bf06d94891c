use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};

use crate::controllers::booking_controller::BookingController;
use crate::dto::booking_dto::{
    BookingCreatedResponse, BookingResponse, CreateBookingRequest, UpdateBookingStatusRequest,
};
use crate::dto::common_dto::MessageResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extractors::{ApiJson, ApiPath};

pub fn create_booking_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_booking))
        .route("/status", put(update_booking_status))
        .route("/:user_id", get(list_bookings))
}

fn controller(state: &AppState) -> BookingController {
    BookingController::new(state.bookings.clone(), state.config.strict_booking_status)
}

async fn create_booking(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateBookingRequest>,
) -> Result<(StatusCode, Json<BookingCreatedResponse>), AppError> {
    let response = controller(&state).create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_bookings(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i64>,
) -> Result<Json<Vec<BookingResponse>>, AppError> {
    let response = controller(&state).list_by_user(user_id).await?;
    Ok(Json(response))
}

async fn update_booking_status(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<UpdateBookingStatusRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let response = controller(&state).update_status(request).await?;
    Ok(Json(response))
}
