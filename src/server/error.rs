//! HTTP-boundary error type.

use crate::error::{ServiceError, StoreError};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

pub const NOT_FOUND_PAGE: &str = "<h1>404 Not Found</h1>";
pub const SERVER_ERROR_PAGE: &str = "<h1>500 Internal Server Error</h1>";

/// Failures a handler cannot turn into a normal page.
#[derive(Error, Debug)]
pub enum AppError {
    /// The request named a contact that does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// The contact store failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// A template failed to render
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(name) => AppError::NotFound(name),
            other => AppError::Storage(other.to_string()),
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Store(store) => store.into(),
            // Handlers re-render the form for these; reaching here is a bug.
            ServiceError::Invalid(errors) => {
                AppError::Storage(format!("unhandled validation failure: {}", errors))
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(what) => {
                warn!(what = %what, "Not found");
                (StatusCode::NOT_FOUND, Html(NOT_FOUND_PAGE)).into_response()
            }
            other => {
                error!(error = %other, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, Html(SERVER_ERROR_PAGE)).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let response = AppError::NotFound("Ayu".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = AppError::Storage("disk full".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_store_not_found_maps_to_not_found() {
        let err: AppError = ServiceError::Store(StoreError::NotFound("Ayu".into())).into();
        assert!(matches!(err, AppError::NotFound(name) if name == "Ayu"));

        let err: AppError = StoreError::Storage("locked".into()).into();
        assert!(matches!(err, AppError::Storage(_)));
    }
}
