//! Límite de tiempo por request

use axum::BoxError;

use crate::utils::errors::AppError;

/// Convierte los errores de la capa de timeout de tower en respuestas JSON
pub async fn handle_timeout_error(err: BoxError) -> AppError {
    if err.is::<tower::timeout::error::Elapsed>() {
        AppError::Timeout
    } else {
        AppError::Internal(format!("Unhandled middleware error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use std::time::Duration;
    use tower::{service_fn, ServiceBuilder, ServiceExt};

    #[tokio::test]
    async fn test_elapsed_maps_to_request_timeout() {
        let slow = ServiceBuilder::new()
            .timeout(Duration::from_millis(10))
            .service(service_fn(|_: ()| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Ok::<_, BoxError>(())
            }));

        let elapsed = slow.oneshot(()).await.unwrap_err();
        let error = handle_timeout_error(elapsed).await;
        assert!(matches!(error, AppError::Timeout));
        assert_eq!(error.status_code(), StatusCode::REQUEST_TIMEOUT);
    }

    #[tokio::test]
    async fn test_other_middleware_errors_are_internal() {
        let error = handle_timeout_error("connection reset".into()).await;
        assert!(matches!(error, AppError::Internal(ref msg) if msg.contains("connection reset")));
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
