//! Server configuration
//!
//! Values come from Shuttle secrets, falling back to environment variables
//! (a local `.env` file is loaded first).

use std::time::Duration;

use anyhow::{Context, Result};

const API_KEY: &str = "CATALOG_API_KEY";
const SERVICE_API_KEY: &str = "CATALOG_SERVICE_API_KEY";
const REQUEST_TIMEOUT_MS: &str = "REQUEST_TIMEOUT_MS";
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 5000;

/// Runtime configuration for the API server
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    /// Admin bearer token, accepted on every catalog route
    pub api_key: Option<String>,
    /// Service-staff bearer token, accepted on `/service/*` only
    pub service_api_key: Option<String>,
    /// Deadline applied to repository work of each request
    pub request_timeout: Option<Duration>,
}

impl ServerConfig {
    pub fn from_secrets(secrets: &shuttle_runtime::SecretStore) -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| secrets.get(key).or_else(|| std::env::var(key).ok()))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup(API_KEY).filter(|k| !k.trim().is_empty());
        let service_api_key = lookup(SERVICE_API_KEY).filter(|k| !k.trim().is_empty());

        let timeout_ms = match lookup(REQUEST_TIMEOUT_MS) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("Invalid {} value: {:?}", REQUEST_TIMEOUT_MS, raw))?,
            None => DEFAULT_REQUEST_TIMEOUT_MS,
        };

        Ok(Self {
            api_key,
            service_api_key,
            request_timeout: (timeout_ms > 0).then(|| Duration::from_millis(timeout_ms)),
        })
    }
}
