//! Handler error type, rendered through the standard response envelope.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use fintrax_shared::ApiResponse;
use serde_json::json;
use std::fmt;

use fintrax_core::error::{DomainError, RepoError};
use fintrax_core::ports::{AuthError, MailError};

/// Application-level error type that converts to envelope responses.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Unauthorized,
    Forbidden(String),
    NotFound(String),
    Conflict(String),
    /// A handler-level throttle, e.g. the OTP regeneration delay. The
    /// per-route rate limit gates answer 429 in middleware before a
    /// handler is ever reached.
    TooEarly(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Unauthorized => write!(f, "Unauthorized"),
            AppError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::TooEarly(msg) => write!(f, "Too early: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::TooEarly(_) => StatusCode::TOO_MANY_REQUESTS,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code().as_u16();
        let envelope = match self {
            AppError::BadRequest(detail) => {
                ApiResponse::failure(status, "Invalid request", Some(json!(detail)))
            }
            AppError::Unauthorized => ApiResponse::failure(status, "Unauthorized", None),
            AppError::Forbidden(msg) => ApiResponse::failure(status, msg.clone(), None),
            AppError::NotFound(msg) => ApiResponse::failure(status, msg.clone(), None),
            AppError::Conflict(msg) => ApiResponse::failure(status, msg.clone(), None),
            AppError::TooEarly(msg) => ApiResponse::failure(status, msg.clone(), None),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ApiResponse::failure(status, "Internal server error", None)
            }
        };

        HttpResponse::build(self.status_code()).json(envelope)
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound("Resource not found".to_string()),
            RepoError::Constraint(msg) => AppError::Conflict(msg),
            RepoError::Storage(msg) => {
                tracing::error!("Storage error: {}", msg);
                AppError::Internal("Storage error".to_string())
            }
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity_type, id } => {
                AppError::NotFound(format!("{} with id {} not found", entity_type, id))
            }
            DomainError::Validation(msg) => AppError::BadRequest(msg),
            DomainError::Duplicate(msg) => AppError::Conflict(msg),
            DomainError::Unauthorized => AppError::Unauthorized,
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials
            | AuthError::TokenExpired
            | AuthError::InvalidToken(_)
            | AuthError::MissingAuth => AppError::Unauthorized,
            AuthError::HashingError(msg) => AppError::Internal(msg),
        }
    }
}

impl From<MailError> for AppError {
    fn from(err: MailError) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
