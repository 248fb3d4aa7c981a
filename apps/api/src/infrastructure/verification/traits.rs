use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq)]
pub struct VerificationRequest {
    pub token: String,
    pub remote_ip: Option<String>,
}

/// The provider's verdict. A rejected token is `success == false`, not an error;
/// errors are reserved for the provider being unreachable.
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationOutcome {
    pub success: bool,
    pub error_codes: Vec<String>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HumanVerifier: Send + Sync {
    async fn verify(
        &self,
        request: &VerificationRequest,
    ) -> Result<VerificationOutcome, DomainError>;
}
