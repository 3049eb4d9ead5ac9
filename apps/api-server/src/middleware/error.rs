//! Error handling middleware - RFC 7807 compliant responses, except for
//! form validation, which hands the submitted values back alongside the
//! field annotations.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use std::fmt;

use quill_core::form::PostFormErrors;
use quill_shared::ErrorResponse;
use quill_shared::dto::{FormRejectedResponse, PostFormBody, PostFormErrorsResponse};

/// Application-level error type that converts to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Unauthorized,
    Conflict(String),
    Internal(String),
    /// Post form rejected: field annotations plus the submitted values.
    FormRejected {
        errors: PostFormErrors,
        values: PostFormBody,
    },
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Unauthorized => write!(f, "Unauthorized"),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
            AppError::FormRejected { .. } => write!(f, "Post form rejected"),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::FormRejected { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        match self {
            AppError::NotFound(detail) => {
                HttpResponse::build(status).json(ErrorResponse::not_found(detail))
            }
            AppError::BadRequest(detail) => {
                HttpResponse::build(status).json(ErrorResponse::bad_request(detail))
            }
            AppError::Unauthorized => {
                HttpResponse::build(status).json(ErrorResponse::unauthorized())
            }
            AppError::Conflict(detail) => {
                HttpResponse::build(status).json(ErrorResponse::conflict(detail))
            }
            AppError::Internal(detail) => {
                // Log internal errors, answer with a generic body
                tracing::error!("Internal error: {}", detail);
                HttpResponse::build(status).json(ErrorResponse::internal_error())
            }
            AppError::FormRejected { errors, values } => {
                HttpResponse::build(status).json(FormRejectedResponse {
                    errors: PostFormErrorsResponse {
                        text: errors.text.map(|e| e.message().to_string()),
                        group: errors.group.map(|e| e.message().to_string()),
                    },
                    values: values.clone(),
                })
            }
        }
    }
}

// Conversion from domain errors
impl From<quill_core::error::DomainError> for AppError {
    fn from(err: quill_core::error::DomainError) -> Self {
        match err {
            quill_core::error::DomainError::NotFound { entity, key } => {
                AppError::NotFound(format!("{} {} not found", entity, key))
            }
            quill_core::error::DomainError::Repo(e) => e.into(),
        }
    }
}

impl From<quill_core::error::RepoError> for AppError {
    fn from(err: quill_core::error::RepoError) -> Self {
        match err {
            quill_core::error::RepoError::NotFound => {
                AppError::NotFound("Resource not found".to_string())
            }
            quill_core::error::RepoError::Constraint(msg) => AppError::Conflict(msg),
            quill_core::error::RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            quill_core::error::RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
