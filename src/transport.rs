//! HTTP transport for the Telegraph API
//!
//! The client talks to the service through two collaborators:
//!
//! - [`Transport`] sends a method name with form parameters and returns the
//!   raw response body.
//! - [`Uploader`] posts named file blobs as a multipart form and returns the
//!   raw response body.
//!
//! [`HttpTransport`] implements both on top of `reqwest`. Tests and callers
//! with their own HTTP stack can plug in anything else.

use crate::config::ClientConfig;
use crate::error::{Result, TelegraphError};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use std::path::Path;
use tracing::debug;

/// Ordered request parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(&'static str, String)>);

impl Params {
    /// Create an empty parameter list
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a parameter
    pub fn push(&mut self, name: &'static str, value: impl Into<String>) {
        self.0.push((name, value.into()));
    }

    /// Append a parameter only when the value is present and non-empty
    pub fn push_non_empty(&mut self, name: &'static str, value: Option<&str>) {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.push(name, value);
        }
    }

    /// First value of a parameter
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Check if a parameter is present
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Parameter names in insertion order
    pub fn names(&self) -> Vec<&'static str> {
        self.0.iter().map(|(k, _)| *k).collect()
    }

    /// Borrow the parameters as name/value pairs
    pub fn as_slice(&self) -> &[(&'static str, String)] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A file to upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    /// File name reported in the multipart part
    pub file_name: String,
    /// File contents
    pub data: Vec<u8>,
}

impl UploadFile {
    /// Create an upload from in-memory bytes
    pub fn new(file_name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            data: data.into(),
        }
    }

    /// Read a file from disk
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self { file_name, data })
    }

    /// MIME type guessed from the file extension
    pub fn mime_type(&self) -> Option<&'static str> {
        let ext = Path::new(&self.file_name).extension()?.to_str()?;
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some("image/jpeg"),
            "png" => Some("image/png"),
            "gif" => Some("image/gif"),
            "webp" => Some("image/webp"),
            "mp4" => Some("video/mp4"),
            _ => None,
        }
    }
}

/// Sends API method calls
#[async_trait]
pub trait Transport: Send + Sync {
    /// Call `method` with `params` and return the raw response body
    async fn call(&self, method: &str, params: &Params) -> Result<Vec<u8>>;
}

/// Posts files to the upload endpoint
#[async_trait]
pub trait Uploader: Send + Sync {
    /// Upload `files` and return the raw response body
    async fn upload_files(&self, files: &[UploadFile]) -> Result<Vec<u8>>;
}

/// `reqwest`-backed transport and uploader
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    config: ClientConfig,
}

impl HttpTransport {
    /// Build a transport from the client configuration
    ///
    /// # Errors
    ///
    /// Returns [`TelegraphError::Config`] if the proxy URL is invalid or the
    /// HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(proxy) = config.proxy.as_deref().filter(|p| !p.is_empty()) {
            let proxy = reqwest::Proxy::all(proxy)
                .map_err(|e| TelegraphError::Config(format!("invalid proxy {proxy}: {e}")))?;
            builder = builder.proxy(proxy);
        }
        let http = builder
            .build()
            .map_err(|e| TelegraphError::Config(e.to_string()))?;

        Ok(Self { http, config })
    }

    /// Configuration this transport was built from
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn call(&self, method: &str, params: &Params) -> Result<Vec<u8>> {
        let url = self.config.method_url(method);
        debug!("POST {} ({} params)", url, params.len());

        let response = self.http.post(&url).form(params.as_slice()).send().await?;
        debug!("{} answered {}", method, response.status());

        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl Uploader for HttpTransport {
    async fn upload_files(&self, files: &[UploadFile]) -> Result<Vec<u8>> {
        let mut form = Form::new();
        for file in files {
            let mut part = Part::bytes(file.data.clone()).file_name(file.file_name.clone());
            if let Some(mime) = file.mime_type() {
                part = part.mime_str(mime)?;
            }
            // The service ignores field names; they only need to be distinct.
            form = form.part(uuid::Uuid::new_v4().to_string(), part);
        }

        debug!("Uploading {} files to {}", files.len(), self.config.upload_url);
        let response = self
            .http
            .post(&self.config.upload_url)
            .multipart(form)
            .send()
            .await?;

        Ok(response.bytes().await?.to_vec())
    }
}
