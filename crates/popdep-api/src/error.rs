//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Bodies follow the `{"detail": "..."}` shape the front-end already
//! handles, e.g. `{"detail": "Département non trouvé"}` on a 404.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Message returned when a department code matches no row.
pub const DEPARTMENT_NOT_FOUND: &str = "Département non trouvé";

/// JSON error response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub detail: String,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found (404).
    #[error("{0}")]
    NotFound(String),

    /// The service cannot answer yet (503).
    #[error("{0}")]
    ServiceUnavailable(String),
}

impl AppError {
    /// The 404 returned by department lookups.
    pub fn department_not_found() -> Self {
        Self::NotFound(DEPARTMENT_NOT_FOUND.to_string())
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Lookups that miss are not logged.
        if let Self::ServiceUnavailable(_) = &self {
            tracing::warn!(error = %self, "service unavailable");
        }

        let body = ErrorBody {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_status_code() {
        let err = AppError::department_not_found();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Département non trouvé");
    }

    #[test]
    fn service_unavailable_status_code() {
        let err = AppError::ServiceUnavailable("empty table".into());
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn into_response_sets_status() {
        let response = AppError::department_not_found().into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
