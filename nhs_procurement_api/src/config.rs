//! Connection settings for [`Client`](crate::Client).

use std::time::Duration;

use url::Url;

use crate::Error;

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings: base URL, optional API key, and transport timeout.
///
/// The base URL is validated and normalized by [`ClientConfig::new`]: it must
/// be a non-empty absolute URL, and trailing `/` characters are stripped so
/// endpoint paths can be appended without producing `//`.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl ClientConfig {
    /// Creates a config for `base_url` with no API key and the default timeout.
    ///
    /// Base URLs carrying a query string or fragment are rejected, since
    /// endpoint paths are appended to the end of the URL.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(Error::InvalidBaseUrl(base_url.to_string()));
        }
        let parsed = Url::parse(trimmed).map_err(|e| {
            tracing::error!("Invalid base URL {:?}: {}", base_url, e);
            Error::InvalidBaseUrl(base_url.to_string())
        })?;
        if parsed.cannot_be_a_base()
            || parsed.query().is_some()
            || parsed.fragment().is_some()
        {
            return Err(Error::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self {
            base_url: trimmed.to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Sends `api_key` as the `x-api-key` header on every request.
    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.api_key = Some(api_key.to_string());
        self
    }

    /// Overrides the transport timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
