//! Blocking client for the endoflife.date API.

use anyhow::{anyhow, Context, Result};
use std::time::Duration;
use url::Url;

/// Production API base.
const DEFAULT_API_BASE: &str = "https://endoflife.date/api";

/// Environment variable overriding the API base URL.
pub const API_BASE_ENV: &str = "EOL_API_BASE";

/// Fetches per-product EOL payloads.
///
/// One GET per product, sequential, no retries. Responses are passed
/// through as opaque JSON.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use workshop_eol_report::eol::EolClient;
///
/// let client = EolClient::new(Duration::from_secs(30));
/// let payload = client.fetch("nodejs").unwrap();
/// ```
pub struct EolClient {
    /// API base URL.
    base: Url,
    /// HTTP client.
    client: reqwest::blocking::Client,
}

impl EolClient {
    /// Create a client against the production API with the given timeout.
    pub fn new(timeout: Duration) -> Self {
        Self::with_base_url(
            Url::parse(DEFAULT_API_BASE).expect("default API base is a valid URL"),
            timeout,
        )
    }

    /// Create a client against a custom API base.
    pub fn with_base_url(base: Url, timeout: Duration) -> Self {
        Self {
            base,
            client: reqwest::blocking::Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// Create a client honoring the [`API_BASE_ENV`] override.
    pub fn from_env(timeout: Duration) -> Result<Self> {
        match std::env::var(API_BASE_ENV) {
            Ok(base) => {
                let base = Url::parse(&base)
                    .with_context(|| format!("invalid {} value: {}", API_BASE_ENV, base))?;
                Ok(Self::with_base_url(base, timeout))
            }
            Err(_) => Ok(Self::new(timeout)),
        }
    }

    /// Fetch the EOL payload for a product slug.
    pub fn fetch(&self, product: &str) -> Result<serde_json::Value> {
        let url = self.product_url(product)?;

        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .with_context(|| format!("Failed to fetch {}", url))?;

        if !response.status().is_success() {
            return Err(anyhow!("HTTP {} fetching {}", response.status(), url));
        }

        response
            .json()
            .with_context(|| format!("Failed to parse response from {}", url))
    }

    fn product_url(&self, product: &str) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("API base {} cannot take a path", self.base))?
            .push(&format!("{}.json", product));
        Ok(url)
    }

    /// Get the API base URL.
    pub fn base(&self) -> &Url {
        &self.base
    }
}
