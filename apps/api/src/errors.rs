use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::resume::DataIntegrityError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Resume data unavailable: {0}")]
    DataIntegrity(#[from] DataIntegrityError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::DataIntegrity(e) => {
                tracing::error!("Resume data error: {e}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "RESUME_UNAVAILABLE",
                    "Resume data is temporarily unavailable".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_integrity_maps_to_service_unavailable() {
        let err: AppError = DataIntegrityError::Schema {
            source_name: "data/resume.json".to_string(),
            violations: vec![],
        }
        .into();
        assert_eq!(
            err.into_response().status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_not_found_status() {
        let response = AppError::NotFound("Project 'x' not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
