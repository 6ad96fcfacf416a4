//! Telegraph client configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default API endpoint; method names are appended as path segments
pub const DEFAULT_API_URL: &str = "https://api.telegra.ph";

/// Default file upload endpoint
pub const DEFAULT_UPLOAD_URL: &str = "https://telegra.ph/upload";

/// Default public site URL that page paths are relative to
pub const DEFAULT_SITE_URL: &str = "https://telegra.ph";

/// Telegraph client configuration
///
/// Contains the endpoints and HTTP settings used by the default transport.
///
/// # Example
///
/// ```
/// use telegraph_rs::ClientConfig;
///
/// let config = ClientConfig::default()
///     .with_timeout_secs(10)
///     .with_proxy("socks5://127.0.0.1:1080");
///
/// assert_eq!(config.api_url, "https://api.telegra.ph");
/// assert_eq!(config.page_url("Sample-Page-12-15"), "https://telegra.ph/Sample-Page-12-15");
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API base URL (e.g., "https://api.telegra.ph")
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Multipart upload URL
    #[serde(default = "default_upload_url")]
    pub upload_url: String,

    /// Public site URL used by [`ClientConfig::page_url`]
    #[serde(default = "default_site_url")]
    pub site_url: String,

    /// Whole-request timeout in seconds (no timeout when unset)
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Proxy URL applied to all requests (e.g., "http://proxy:8080")
    #[serde(default)]
    pub proxy: Option<String>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_upload_url() -> String {
    DEFAULT_UPLOAD_URL.to_string()
}

fn default_site_url() -> String {
    DEFAULT_SITE_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            upload_url: default_upload_url(),
            site_url: default_site_url(),
            timeout_secs: None,
            proxy: None,
        }
    }
}

impl ClientConfig {
    /// Create a configuration pointing at custom endpoints
    ///
    /// # Arguments
    ///
    /// * `api_url` - API base URL
    /// * `upload_url` - Multipart upload URL
    /// * `site_url` - Public site URL
    pub fn new(
        api_url: impl Into<String>,
        upload_url: impl Into<String>,
        site_url: impl Into<String>,
    ) -> Self {
        Self {
            api_url: api_url.into(),
            upload_url: upload_url.into(),
            site_url: site_url.into(),
            timeout_secs: None,
            proxy: None,
        }
    }

    /// Set the request timeout in seconds
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Route all requests through a proxy
    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Request timeout as a `Duration`
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// URL of an API method
    pub fn method_url(&self, method: &str) -> String {
        format!("{}/{}", self.api_url.trim_end_matches('/'), method)
    }

    /// Public URL of a page path
    pub fn page_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.site_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = ClientConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.upload_url, DEFAULT_UPLOAD_URL);
        assert_eq!(config.site_url, DEFAULT_SITE_URL);
        assert!(config.timeout().is_none());
        assert!(config.proxy.is_none());
    }

    #[test]
    fn test_new() {
        let config = ClientConfig::new("http://localhost:8080/", "http://localhost:8080/upload", "http://localhost");
        assert_eq!(config.method_url("getPage"), "http://localhost:8080/getPage");
        assert_eq!(config.upload_url, "http://localhost:8080/upload");
    }

    #[test]
    fn test_helpers() {
        let config = ClientConfig::default()
            .with_timeout_secs(30)
            .with_proxy("http://proxy:3128");
        assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
        assert_eq!(config.proxy.as_deref(), Some("http://proxy:3128"));
    }

    #[test]
    fn test_page_url() {
        let config = ClientConfig::default();
        assert_eq!(config.page_url("Hello-03-14"), "https://telegra.ph/Hello-03-14");
        assert_eq!(config.page_url("/file/a.png"), "https://telegra.ph/file/a.png");
    }

    #[test]
    fn test_serde_defaults() {
        let config: ClientConfig = serde_json::from_str(r#"{"timeout_secs":5}"#).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.timeout_secs, Some(5));
    }
}
