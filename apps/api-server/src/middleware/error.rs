//! Error handling - maps the domain error taxonomy onto HTTP responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use std::fmt;

use remark_core::domain::{FieldError, FieldSource};
use remark_core::error::DomainError;
use remark_shared::{FieldErrorResponse, MessageResponse, ValidationErrorResponse};

/// Body sent with every 500 response. Details stay in the server log.
pub const SERVER_ERROR_BODY: &str = "Server Error";

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    /// 400 with `{ "errors": [...] }`.
    Validation(Vec<FieldError>),
    /// 404 with `{ "msg": ... }`.
    NotFound(String),
    /// 500 with a plain-text body.
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(errors) => write!(f, "Validation errors: {:?}", errors),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Validation(errors) => {
                let body = ValidationErrorResponse {
                    errors: errors.iter().map(field_error_response).collect(),
                };
                HttpResponse::build(self.status_code()).json(body)
            }
            AppError::NotFound(msg) => {
                HttpResponse::build(self.status_code()).json(MessageResponse::new(msg.clone()))
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                HttpResponse::build(self.status_code())
                    .content_type("text/plain; charset=utf-8")
                    .body(SERVER_ERROR_BODY)
            }
        }
    }
}

fn field_error_response(err: &FieldError) -> FieldErrorResponse {
    FieldErrorResponse {
        value: err.value.clone(),
        msg: err.message.clone(),
        param: err.field.clone(),
        location: match err.source {
            FieldSource::Body => "body",
            FieldSource::Params => "params",
        }
        .to_string(),
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(errors) => AppError::Validation(errors),
            DomainError::NotFound { entity_type, .. } => {
                AppError::NotFound(format!("{} not found", entity_type))
            }
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl AppError {
    /// 400 for a request body that does not deserialize, in the validation shape.
    pub fn malformed_body(err: impl fmt::Display) -> Self {
        tracing::debug!("Rejected request body: {}", err);
        AppError::Validation(vec![FieldError::new(
            "body",
            err.to_string(),
            "",
            FieldSource::Body,
        )])
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
