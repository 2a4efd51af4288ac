//! HTTP-facing error type.
//!
//! Handlers return [`AppError`]; domain errors are converted here and nowhere
//! else into status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::errors::GeocodeError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Error payload returned to API clients.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    MethodNotAllowed { message: String, details: Value },
    BadGateway { message: String, details: Value },
    GatewayTimeout { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn method_not_allowed() -> Self {
        Self::MethodNotAllowed {
            message: "method not allowed".to_string(),
            details: json!({}),
        }
    }
    pub fn bad_gateway(message: impl Into<String>, details: Value) -> Self {
        Self::BadGateway {
            message: message.into(),
            details,
        }
    }
    pub fn gateway_timeout(message: impl Into<String>, details: Value) -> Self {
        Self::GatewayTimeout {
            message: message.into(),
            details,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            AppError::BadGateway { .. } => StatusCode::BAD_GATEWAY,
            AppError::GatewayTimeout { .. } => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    /// Converts the error into its client-facing payload.
    pub fn to_error_info(self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::MethodNotAllowed { message, details } => {
                ("method_not_allowed", message, details)
            }
            AppError::BadGateway { message, details } => ("bad_gateway", message, details),
            AppError::GatewayTimeout { message, details } => {
                ("gateway_timeout", message, details)
            }
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<GeocodeError> for AppError {
    fn from(e: GeocodeError) -> Self {
        match e {
            GeocodeError::AddressRequired => {
                AppError::bad_request("address query parameter is required", json!({}))
            }
            GeocodeError::NoResults => AppError::not_found(e.to_string(), json!({})),
            GeocodeError::Timeout | GeocodeError::Canceled => AppError::gateway_timeout(
                "geocoding request timed out",
                json!({ "reason": e.to_string() }),
            ),
            GeocodeError::Upstream(message) => AppError::bad_gateway(message, json!({})),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let fields: Vec<String> = e.field_errors().keys().map(|field| field.to_string()).collect();
        AppError::bad_request("Invalid request parameters", json!({ "fields": fields }))
    }
}
