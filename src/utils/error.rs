use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::time::Duration;
use thiserror::Error;

use crate::database::StoreError;
use crate::models::ApiResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    #[error("{0}")]
    Validation(String),

    #[error("invalid user id: {0}")]
    InvalidId(String),

    #[error("user not found: {0}")]
    NotFound(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("database operation timed out after {0:?}")]
    Timeout(Duration),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Database(err.to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidBody(_) | AppError::Validation(_) | AppError::InvalidId(_) => {
                StatusCode::BAD_REQUEST
            }
            // Not-found keeps the 500 contract of existing clients
            AppError::NotFound(_) | AppError::Database(_) | AppError::Timeout(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("❌ {}", self);
        } else {
            log::warn!("⚠️ {}", self);
        }

        ApiResponse::empty(status, self.to_string()).into_http_response()
    }
}
