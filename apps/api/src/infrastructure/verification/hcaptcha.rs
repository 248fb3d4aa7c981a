use super::traits::{HumanVerifier, VerificationOutcome, VerificationRequest};
use crate::config::Config;
use crate::domain::shared::errors::DomainError;
use crate::infrastructure::http::{status_error, upstream_error};
use async_trait::async_trait;
use serde::Deserialize;

const SERVICE: &str = "verification service";

#[derive(Debug, Deserialize)]
struct SiteVerifyResponse {
    success: bool,
    #[serde(rename = "error-codes", default)]
    error_codes: Vec<String>,
}

/// hCaptcha `siteverify` client.
pub struct HCaptchaVerifier {
    http: reqwest::Client,
    verify_url: String,
    secret: String,
    site_key: Option<String>,
}

impl HCaptchaVerifier {
    pub fn new(config: &Config, http: reqwest::Client) -> Self {
        Self {
            http,
            verify_url: config.hcaptcha_verify_url.clone(),
            secret: config.hcaptcha_secret_key.clone(),
            site_key: config.hcaptcha_site_key.clone(),
        }
    }
}

#[async_trait]
impl HumanVerifier for HCaptchaVerifier {
    async fn verify(
        &self,
        request: &VerificationRequest,
    ) -> Result<VerificationOutcome, DomainError> {
        let mut form = vec![
            ("secret", self.secret.as_str()),
            ("response", request.token.as_str()),
        ];
        if let Some(ip) = request.remote_ip.as_deref() {
            form.push(("remoteip", ip));
        }
        if let Some(site_key) = self.site_key.as_deref() {
            form.push(("sitekey", site_key));
        }

        let response = self
            .http
            .post(&self.verify_url)
            .form(&form)
            .send()
            .await
            .map_err(|e| upstream_error(SERVICE, e))?;
        if !response.status().is_success() {
            return Err(status_error(SERVICE, response).await);
        }

        let verdict: SiteVerifyResponse = response
            .json()
            .await
            .map_err(|e| upstream_error(SERVICE, e))?;
        Ok(VerificationOutcome {
            success: verdict.success,
            error_codes: verdict.error_codes,
        })
    }
}
