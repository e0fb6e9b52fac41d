//! HTTP manifest fetching

use std::time::Duration;

use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::{Error, Result};

/// Default request timeout for manifest fetches
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches manifest documents over HTTP with an explicit timeout
#[derive(Debug, Clone)]
pub struct ManifestFetcher {
    client: Client,
}

impl ManifestFetcher {
    /// Create a fetcher whose requests time out after `timeout`
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Fetch the manifest text at `url`.
    ///
    /// Non-success HTTP statuses are reported as [`Error::HttpStatus`];
    /// transport failures propagate unchanged. No retries.
    pub async fn fetch(&self, url: &Url) -> Result<String> {
        debug!(%url, "fetching manifest");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                url: url.to_string(),
                status,
            });
        }

        let body = response.text().await?;
        debug!(%url, bytes = body.len(), "manifest fetched");
        Ok(body)
    }
}

impl Default for ManifestFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT).expect("Failed to create HTTP client")
    }
}
