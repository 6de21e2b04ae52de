use std::any::Any;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;

use crate::validation::ValidationError;

/// Single-message error body, used for lookups and the generic fallbacks.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    #[schema(example = "Hero not found")]
    pub error: String,
}

/// Error list body, used by the write endpoints.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorsBody {
    #[schema(example = json!(["validation errors"]))]
    pub errors: Vec<String>,
}

pub const VALIDATION_ERRORS: &str = "validation errors";
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    /// The entity addressed by the request path does not exist.
    NotFound(String),
    /// An id referenced from a request body does not exist.
    ReferenceNotFound(String),
    /// A field failed a domain constraint. The detail is logged, never returned.
    Validation(String),
    MissingFields(String),
    /// The request body could not be read as the expected JSON.
    BadRequest(String),
    /// No route matched, or a path parameter had the wrong shape.
    ResourceNotFound,
    /// Any server-side failure outside the write endpoints.
    Internal(String),
    /// A persistence failure while a write was in flight. The write is rolled back.
    Unexpected(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) | AppError::ReferenceNotFound(_) | AppError::ResourceNotFound => {
                StatusCode::NOT_FOUND
            }
            AppError::Validation(_) | AppError::MissingFields(_) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Internal(_) | AppError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Re-tag a server-side failure as one that interrupted a write, so it
    /// renders with the write endpoints' error-list body.
    pub fn into_write_failure(self) -> Self {
        match self {
            AppError::Internal(detail) => AppError::Unexpected(detail),
            other => other,
        }
    }
}

fn error(msg: impl Into<String>) -> Response {
    Json(ErrorBody { error: msg.into() }).into_response()
}

fn errors(msg: impl Into<String>) -> Response {
    Json(ErrorsBody {
        errors: vec![msg.into()],
    })
    .into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            AppError::NotFound(msg) => error(msg),
            AppError::ReferenceNotFound(msg) => errors(msg),
            AppError::Validation(detail) => {
                tracing::debug!("Validation failed: {}", detail);
                errors(VALIDATION_ERRORS)
            }
            AppError::MissingFields(msg) => errors(msg),
            AppError::BadRequest(detail) => {
                tracing::debug!("Bad request: {}", detail);
                error("Bad request")
            }
            AppError::ResourceNotFound => error("Resource not found"),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                error("Internal server error")
            }
            AppError::Unexpected(detail) => {
                tracing::error!("Write failed, rolled back: {}", detail);
                errors(UNEXPECTED_ERROR)
            }
        };
        (status, body).into_response()
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

/// Fallback for requests that match no route.
pub async fn resource_not_found() -> AppError {
    AppError::ResourceNotFound
}

/// Turns a handler panic into the generic 500 body.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::Internal(format!("handler panicked: {detail}")).into_response()
}
