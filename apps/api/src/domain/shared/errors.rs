use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

#[derive(Debug, Error, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    /// Carries the error codes reported by the verification provider.
    #[error("Verification failed")]
    VerificationFailed(Vec<String>),
    #[error("Infrastructure error: {0}")]
    InfrastructureError(String),
}
