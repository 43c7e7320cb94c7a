use anyhow::{Context, Result};
use log::debug;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::FinalityProvider;

pub const DEFAULT_REGISTRY_URL: &str =
    "https://babylon.nodes.guru/babylon/btcstaking/v1/finality_providers";

/// Environment variable overriding [`DEFAULT_REGISTRY_URL`].
pub const REGISTRY_URL_ENV: &str = "FP_REGISTRY_URL";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Longest slice of an error body carried into a status failure message.
const ERROR_BODY_LIMIT: usize = 200;

#[derive(Deserialize)]
struct ListResponse {
    #[serde(default)]
    finality_providers: Vec<FinalityProvider>,
}

/// Registry endpoint from the environment, or the public default.
pub fn registry_url() -> String {
    if let Ok(url) = std::env::var(REGISTRY_URL_ENV) {
        return url;
    }
    DEFAULT_REGISTRY_URL.to_string()
}

/// Decode a registry listing body. A body without a `finality_providers` key
/// is an empty listing.
pub fn parse_finality_providers(body: &str) -> Result<Vec<FinalityProvider>> {
    let listing: ListResponse =
        serde_json::from_str(body).context("Failed to parse finality provider list")?;
    Ok(listing.finality_providers)
}

pub struct RegistryClient {
    url: String,
    client: Client,
}

impl RegistryClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            url: url.into(),
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the full provider listing in one request. Never retries.
    pub fn fetch_finality_providers(&self) -> Result<Vec<FinalityProvider>> {
        debug!("Fetching finality providers from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .with_context(|| format!("Failed to reach {}", self.url))?;

        let status = response.status();
        debug!("Registry responded with {status}");
        if !status.is_success() {
            let error_text = response.text().unwrap_or_default();
            anyhow::bail!(
                "Registry request to {} failed ({}): {}",
                self.url,
                status,
                summarize_error_body(&error_text)
            );
        }

        let body = response.text().context("Failed to read response body")?;
        let providers = parse_finality_providers(&body)?;
        debug!("Decoded {} finality providers", providers.len());

        Ok(providers)
    }
}

/// First non-blank line of an error body, capped at [`ERROR_BODY_LIMIT`] chars.
fn summarize_error_body(body: &str) -> String {
    let line = body
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default();

    if line.chars().count() <= ERROR_BODY_LIMIT {
        return line.to_string();
    }
    let mut summary: String = line.chars().take(ERROR_BODY_LIMIT).collect();
    summary.push_str("...");
    summary
}
