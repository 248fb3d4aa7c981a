//! Application configuration loading from environment variables.
//!
//! Configuration is read once at startup into [`Config`], which the application
//! state shares behind an `Arc`. Nothing reads the environment after that.
//!
//! # Environment Variables
//!
//! ## Required Variables
//! - `SANITY_PROJECT_ID`: Content store project identifier
//! - `SANITY_DATASET`: Content store dataset name
//! - `SANITY_API_TOKEN`: Content store token with write access
//! - `HCAPTCHA_SECRET_KEY`: Secret for the verification service
//!
//! ## Optional Variables
//! - `RUST_LOG`: Logging level (default: "info,mosaic_api=debug,tower_http=debug")
//! - `HOST`: Server bind address (default: "0.0.0.0")
//! - `PORT`: Server port (default: 3000)
//! - `ALLOWED_ORIGINS`: Comma-separated CORS origins (default: none)
//! - `SANITY_API_VERSION`: Dated API version (default: "2023-05-03")
//! - `SANITY_USE_CDN`: Serve reads from the public CDN without the token (default: true)
//! - `SANITY_API_URL`: Override the store host for reads and writes
//! - `HCAPTCHA_SITE_KEY`: Site key forwarded to `siteverify`
//! - `HCAPTCHA_VERIFY_URL`: Verification endpoint (default: "https://hcaptcha.com/siteverify")
//! - `UPSTREAM_TIMEOUT_SECONDS`: Timeout for outbound calls (default: 10)

const REQUIRED: &[&str] = &[
    "SANITY_PROJECT_ID",
    "SANITY_DATASET",
    "SANITY_API_TOKEN",
    "HCAPTCHA_SECRET_KEY",
];

#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Origins allowed by CORS; empty means any origin in debug builds only
    pub allowed_origins: Vec<String>,

    pub sanity_project_id: String,

    pub sanity_dataset: String,

    /// Write credential; also used for reads when the CDN is off
    pub sanity_api_token: String,

    /// Dated API version without the leading `v` (e.g. `2023-05-03`)
    pub sanity_api_version: String,

    pub sanity_use_cdn: bool,

    /// Base URL replacing both `https://<project>.api.sanity.io` and the CDN host
    pub sanity_api_url: Option<String>,

    pub hcaptcha_secret_key: String,

    pub hcaptcha_site_key: Option<String>,

    pub hcaptcha_verify_url: String,

    /// Timeout applied to every outbound request
    pub upstream_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error naming every required variable that is missing or
    /// blank, or the first optional variable that fails to parse.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let missing: Vec<&str> = REQUIRED
            .iter()
            .copied()
            .filter(|&key| get(key).is_none())
            .collect();
        if !missing.is_empty() {
            anyhow::bail!(
                "Missing required environment variable(s): {}",
                missing.join(", ")
            );
        }
        let required = |key: &str| get(key).unwrap_or_default();

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&get, "PORT", 3000)?,
            allowed_origins: get("ALLOWED_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(str::trim)
                        .filter(|origin| !origin.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
            sanity_project_id: required("SANITY_PROJECT_ID"),
            sanity_dataset: required("SANITY_DATASET"),
            sanity_api_token: required("SANITY_API_TOKEN"),
            sanity_api_version: get("SANITY_API_VERSION")
                .unwrap_or_else(|| "2023-05-03".to_string()),
            sanity_use_cdn: parse_or(&get, "SANITY_USE_CDN", true)?,
            sanity_api_url: get("SANITY_API_URL"),
            hcaptcha_secret_key: required("HCAPTCHA_SECRET_KEY"),
            hcaptcha_site_key: get("HCAPTCHA_SITE_KEY"),
            hcaptcha_verify_url: get("HCAPTCHA_VERIFY_URL")
                .unwrap_or_else(|| "https://hcaptcha.com/siteverify".to_string()),
            upstream_timeout_seconds: parse_or(&get, "UPSTREAM_TIMEOUT_SECONDS", 10)?,
        })
    }
}

/// Parse a variable if set, otherwise return the default.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn parse_or<G, T>(get: &G, key: &str, default: T) -> anyhow::Result<T>
where
    G: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match get(key) {
        Some(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        None => Ok(default),
    }
}
