//! HTTP error handling and response conversion.
//!
//! Handlers return [`AppError`], which maps each failure category to a status
//! code and a JSON body of the form `{ "message": ... }`. Internal details are
//! logged but never sent to the client.

use crate::domain::shared::errors::DomainError;
use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Application-level errors returned from handlers.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found (404).
    NotFound(String),

    /// Request data failed validation (400).
    ValidationError(String),

    /// Human verification rejected the token (400).
    VerificationFailed(Vec<String>),

    /// Route exists but not for this method (405). Carries the `Allow` value.
    MethodNotAllowed { allow: &'static str },

    /// Downstream store or network failure (500).
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            Self::VerificationFailed(codes) if codes.is_empty() => {
                write!(f, "Verification failed")
            }
            Self::VerificationFailed(codes) => {
                write!(f, "Verification failed: {}", codes.join(", "))
            }
            Self::MethodNotAllowed { allow } => write!(f, "Method not allowed (allow: {})", allow),
            Self::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl AppError {
    /// Get the appropriate HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::ValidationError(_) | Self::VerificationFailed(_) => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get a user-safe error message (without implementation details).
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound(_) => "Resource not found".into(),
            Self::ValidationError(msg) => msg.clone(),
            Self::VerificationFailed(_) => "Verification failed. Please try again.".into(),
            Self::MethodNotAllowed { .. } => "Method Not Allowed".into(),
            Self::Internal(_) => "Internal server error.".into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.user_message();

        match status {
            StatusCode::INTERNAL_SERVER_ERROR => tracing::error!("error={}", self),
            StatusCode::NOT_FOUND | StatusCode::METHOD_NOT_ALLOWED => {
                tracing::debug!("error={}", self)
            }
            _ => tracing::warn!("error={}", self),
        }

        let mut response = (status, Json(json!({ "message": message }))).into_response();
        if let Self::MethodNotAllowed { allow } = self {
            response
                .headers_mut()
                .insert(header::ALLOW, HeaderValue::from_static(allow));
        }
        response
    }
}

// === Domain Error Conversion ===

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound(msg) => AppError::NotFound(msg),
            DomainError::ValidationError(msg) => AppError::ValidationError(msg),
            DomainError::VerificationFailed(codes) => AppError::VerificationFailed(codes),
            DomainError::InfrastructureError(msg) => {
                tracing::error!(infrastructure_error = %msg);
                AppError::Internal(msg)
            }
        }
    }
}

// === Extractor Rejections ===

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::ValidationError(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::ValidationError(format!("Invalid query string: {}", rejection.body_text()))
    }
}
