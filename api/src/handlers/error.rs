//! Translation of domain errors into HTTP responses.
//!
//! Every route funnels failures through [`handle_domain_error`], so the
//! whole API speaks the same `ErrorResponse` shape with stable error codes.

use std::fmt;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use validator::ValidationErrors;

use tf_core::errors::{AuthError, BookingError, DomainError, TokenError};
use tf_shared::errors::{error_codes, ErrorResponse};

/// Wrapper making `DomainError` usable as an actix error, including from
/// middleware where a plain `HttpResponse` cannot be returned.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self(error)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        status_for(&self.0)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(body_for(&self.0))
    }
}

fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Validation { .. } => StatusCode::BAD_REQUEST,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Conflict { .. } => StatusCode::CONFLICT,
        DomainError::Unauthorized => StatusCode::UNAUTHORIZED,
        DomainError::Forbidden => StatusCode::FORBIDDEN,
        DomainError::Database { .. } | DomainError::Internal { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        DomainError::Auth(auth) => match auth {
            AuthError::EmailAlreadyRegistered => StatusCode::CONFLICT,
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::InactiveUser | AuthError::InsufficientPermissions => StatusCode::FORBIDDEN,
            AuthError::UserNotFound => StatusCode::NOT_FOUND,
        },
        DomainError::Token(_) => StatusCode::UNAUTHORIZED,
        DomainError::Booking(booking) => match booking {
            BookingError::TimeConflict => StatusCode::CONFLICT,
            BookingError::StatusChangeForbidden => StatusCode::FORBIDDEN,
            BookingError::StartNotBeforeEnd
            | BookingError::StartInPast
            | BookingError::InvalidDuration
            | BookingError::InvalidDate
            | BookingError::NotCancellable
            | BookingError::CancellationWindowClosed => StatusCode::BAD_REQUEST,
        },
    }
}

fn code_for(error: &DomainError) -> &'static str {
    match error {
        DomainError::Validation { .. } => error_codes::VALIDATION_ERROR,
        DomainError::NotFound { .. } => error_codes::NOT_FOUND,
        DomainError::Conflict { .. } => error_codes::CONFLICT,
        DomainError::Unauthorized => error_codes::UNAUTHORIZED,
        DomainError::Forbidden => error_codes::FORBIDDEN,
        DomainError::Database { .. } => error_codes::DATABASE_ERROR,
        DomainError::Internal { .. } => error_codes::INTERNAL_ERROR,
        DomainError::Auth(auth) => match auth {
            AuthError::EmailAlreadyRegistered => error_codes::EMAIL_TAKEN,
            AuthError::InvalidCredentials => error_codes::UNAUTHORIZED,
            AuthError::InactiveUser | AuthError::InsufficientPermissions => error_codes::FORBIDDEN,
            AuthError::UserNotFound => error_codes::NOT_FOUND,
        },
        DomainError::Token(token) => match token {
            TokenError::TokenExpired => error_codes::TOKEN_EXPIRED,
            _ => error_codes::TOKEN_INVALID,
        },
        DomainError::Booking(booking) => match booking {
            BookingError::TimeConflict => error_codes::BOOKING_CONFLICT,
            BookingError::StatusChangeForbidden => error_codes::FORBIDDEN,
            _ => error_codes::VALIDATION_ERROR,
        },
    }
}

fn body_for(error: &DomainError) -> ErrorResponse {
    // 5xx details stay in the logs, not the response
    let message = match error {
        DomainError::Database { .. } | DomainError::Internal { .. } => {
            "An internal error occurred".to_string()
        }
        other => other.to_string(),
    };
    ErrorResponse::new(code_for(error), message)
}

/// Convert a domain error into its HTTP response, logging server faults
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match &error {
        DomainError::Database { message } | DomainError::Internal { message } => {
            log::error!("internal error: {message}");
        }
        other => log::debug!("request failed: {other}"),
    }
    ApiError(error).error_response()
}

/// Convert `validator` failures into a 400 with per-field details
pub fn handle_validation_errors(errors: ValidationErrors) -> HttpResponse {
    let mut response = ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request body");
    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        response = response.add_detail(field.to_string(), messages);
    }
    HttpResponse::BadRequest().json(response)
}
