//! Thin HTTP client for the headless content store.
//!
//! Two operations only: a GROQ query with JSON-encoded `$params`, and a
//! single-document `create` mutation. Reads may go through the public CDN
//! host; writes always go to the authenticated API host.

use crate::config::Config;
use crate::domain::shared::errors::DomainError;
use crate::infrastructure::http::{status_error, upstream_error};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::{Value, json};
use tracing::debug;

const SERVICE: &str = "content store";

#[derive(Deserialize)]
struct QueryResponse<T> {
    result: T,
}

#[derive(Deserialize)]
struct MutationResponse {
    #[serde(default)]
    results: Vec<MutationResult>,
}

#[derive(Deserialize)]
struct MutationResult {
    id: String,
}

pub struct SanityClient {
    http: reqwest::Client,
    query_url: String,
    mutate_url: String,
    token: String,
    authenticated_reads: bool,
}

impl SanityClient {
    pub fn new(config: &Config, http: reqwest::Client) -> Self {
        let version = config.sanity_api_version.trim_start_matches('v');
        let (query_host, api_host) = match config.sanity_api_url.as_deref() {
            Some(base) => {
                let base = base.trim_end_matches('/').to_string();
                (base.clone(), base)
            }
            None => {
                let cdn_or_api = if config.sanity_use_cdn { "apicdn" } else { "api" };
                (
                    format!("https://{}.{}.sanity.io", config.sanity_project_id, cdn_or_api),
                    format!("https://{}.api.sanity.io", config.sanity_project_id),
                )
            }
        };

        Self {
            http,
            query_url: format!(
                "{}/v{}/data/query/{}",
                query_host, version, config.sanity_dataset
            ),
            mutate_url: format!(
                "{}/v{}/data/mutate/{}",
                api_host, version, config.sanity_dataset
            ),
            token: config.sanity_api_token.clone(),
            authenticated_reads: !config.sanity_use_cdn,
        }
    }

    /// Run a GROQ query. Each parameter is sent as `$name=<json>`.
    pub async fn query<T: DeserializeOwned>(
        &self,
        groq: &str,
        params: &[(&str, Value)],
    ) -> Result<T, DomainError> {
        let mut pairs: Vec<(String, String)> = Vec::with_capacity(params.len() + 1);
        pairs.push(("query".to_string(), groq.to_string()));
        for (name, value) in params {
            pairs.push((format!("${}", name), value.to_string()));
        }

        let mut request = self.http.get(&self.query_url).query(&pairs);
        if self.authenticated_reads {
            request = request.bearer_auth(&self.token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| upstream_error(SERVICE, e))?;
        if !response.status().is_success() {
            return Err(status_error(SERVICE, response).await);
        }

        let payload: QueryResponse<T> = response
            .json()
            .await
            .map_err(|e| upstream_error(SERVICE, e))?;
        Ok(payload.result)
    }

    /// Create one document and return the identifier the store assigned.
    pub async fn create(&self, document: Value) -> Result<String, DomainError> {
        let response = self
            .http
            .post(&self.mutate_url)
            .query(&[("returnIds", "true")])
            .bearer_auth(&self.token)
            .json(&json!({ "mutations": [{ "create": document }] }))
            .send()
            .await
            .map_err(|e| upstream_error(SERVICE, e))?;
        if !response.status().is_success() {
            return Err(status_error(SERVICE, response).await);
        }

        let payload: MutationResponse = response
            .json()
            .await
            .map_err(|e| upstream_error(SERVICE, e))?;
        let id = payload
            .results
            .into_iter()
            .next()
            .map(|result| result.id)
            .ok_or_else(|| {
                DomainError::InfrastructureError(
                    "content store create returned no document id".into(),
                )
            })?;
        debug!(document_id = %id, "Created document");
        Ok(id)
    }
}
