use crate::domain::shared::errors::DomainError;
use std::time::Duration;

const USER_AGENT: &str = concat!("mosaic-api/", env!("CARGO_PKG_VERSION"));

/// Shared outbound client. Requests are never retried; the timeout bounds how
/// long a handler can wait on an upstream.
pub fn build_http_client(timeout: Duration) -> anyhow::Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()?)
}

pub fn upstream_error(service: &str, err: reqwest::Error) -> DomainError {
    let kind = if err.is_timeout() {
        "timed out"
    } else if err.is_connect() {
        "connection failed"
    } else if err.is_decode() {
        "returned an unreadable response"
    } else {
        "request failed"
    };
    tracing::warn!(service, error = %err, "Upstream {}", kind);
    DomainError::InfrastructureError(format!("{} {}: {}", service, kind, err))
}

/// Turn a non-success upstream status into an infrastructure error, keeping a
/// bounded slice of the body for the logs.
pub async fn status_error(service: &str, response: reqwest::Response) -> DomainError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let snippet: String = body.chars().take(300).collect();
    DomainError::InfrastructureError(format!(
        "{} responded with {}: {}",
        service, status, snippet
    ))
}
