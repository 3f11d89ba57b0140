//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("book not found")]
    NotFound,
    #[error("validation failed")]
    Validation(Vec<String>),
    #[error("{0}")]
    BadRequest(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// Replace a backend failure with an operation-level message. The sqlx
    /// cause is logged here and never reaches the client; other variants pass
    /// through unchanged.
    pub fn storage_context(self, message: &'static str) -> AppError {
        match self {
            AppError::Db(cause) => {
                tracing::error!(error = %cause, "{message}");
                AppError::Internal(message.to_string())
            }
            other => other,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Serialize)]
struct ViolationsBody {
    errors: Vec<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(ViolationsBody { errors })).into_response()
            }
            AppError::NotFound => error_response(StatusCode::NOT_FOUND, self.to_string()),
            AppError::BadRequest(message) => error_response(StatusCode::BAD_REQUEST, message),
            AppError::Db(e) => {
                if matches!(e, sqlx::Error::RowNotFound) {
                    error_response(StatusCode::NOT_FOUND, AppError::NotFound.to_string())
                } else {
                    tracing::error!(error = %e, "unhandled database error");
                    error_response(StatusCode::INTERNAL_SERVER_ERROR, "database error".into())
                }
            }
            AppError::Internal(message) => {
                error_response(StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        }
    }
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorBody { error })).into_response()
}
