//! Source of the latest released version

use std::time::Duration;

#[cfg(test)]
use mockall::automock;
use tracing::{debug, warn};

use crate::config::UpdateConfig;
use crate::update::error::FetchError;
use crate::version::Version;

/// Trait for fetching the latest released version
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait VersionSource: Send + Sync {
    /// Fetches the latest released version
    ///
    /// # Returns
    /// * `Ok(Version)` - The version currently published as latest
    /// * `Err(FetchError)` - If the request fails or the response is not a version
    async fn fetch_latest_version(&self) -> Result<Version, FetchError>;
}

/// Reads the latest version from a plain-text HTTP resource
pub struct HttpVersionSource {
    client: reqwest::Client,
    url: String,
}

impl HttpVersionSource {
    /// Creates a source for `url` identifying itself with `user_agent`
    pub fn new(url: &str, user_agent: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    pub fn from_config(config: &UpdateConfig, user_agent: &str) -> Result<Self, FetchError> {
        Self::new(&config.latest_version_url, user_agent, config.fetch_timeout())
    }
}

#[async_trait::async_trait]
impl VersionSource for HttpVersionSource {
    async fn fetch_latest_version(&self) -> Result<Version, FetchError> {
        debug!("Fetching latest version from {}", self.url);

        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Latest version request returned status {}: {}", status, self.url);
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await?;
        parse_version_body(&body)
    }
}

fn parse_version_body(body: &[u8]) -> Result<Version, FetchError> {
    if !body.is_ascii() {
        return Err(FetchError::NotAscii);
    }
    // ASCII is valid UTF-8
    let text = String::from_utf8_lossy(body);
    Ok(Version::parse(text.trim())?)
}
