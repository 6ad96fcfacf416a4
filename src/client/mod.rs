//! Telegraph client implementation

mod account;
mod pages;
mod upload;

use crate::config::ClientConfig;
use crate::error::{Result, TelegraphError};
use crate::response;
use crate::transport::{HttpTransport, Params, Transport};
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Async Telegraph API client
///
/// Methods that return a payload yield `Ok(None)` when the server reports
/// success without a `result` field.
///
/// # Example
///
/// ```no_run
/// use telegraph_rs::{ClientConfig, CreateAccountOptions, Element, Node, PageOptions, TelegraphClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let mut client = TelegraphClient::new(ClientConfig::default().with_timeout_secs(10))?;
///
/// let account = client
///     .create_account("Sandbox", &CreateAccountOptions::default().author_name("Anonymous"))
///     .await?
///     .ok_or("no account returned")?;
/// if let Some(token) = account.access_token {
///     client.set_access_token(token);
/// }
///
/// let content: Vec<Node> = vec![Element::new("p").child("hello world").into()];
/// let page = client
///     .create_page("Sample Page", &content, &PageOptions::default())
///     .await?;
/// println!("Published at {:?}", page.map(|p| p.url));
/// # Ok(())
/// # }
/// ```
#[must_use]
pub struct TelegraphClient<T = HttpTransport> {
    /// Transport shared between clones
    transport: Arc<T>,
    /// Access token sent with account-scoped methods
    access_token: Option<String>,
}

impl TelegraphClient<HttpTransport> {
    /// Create a client using the default HTTP transport and no access token
    ///
    /// # Errors
    ///
    /// Returns [`TelegraphError::Config`] if the transport cannot be built
    /// from `config` (for example an invalid proxy URL).
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self::with_transport(HttpTransport::new(config)?))
    }

    /// Create a client with an existing access token
    pub fn with_access_token(config: ClientConfig, access_token: impl Into<String>) -> Result<Self> {
        let mut client = Self::new(config)?;
        client.set_access_token(access_token);
        Ok(client)
    }
}

impl<T> TelegraphClient<T> {
    /// Create a client on top of a custom transport
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
            access_token: None,
        }
    }

    /// Current access token, if any
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Replace the access token used by subsequent calls
    pub fn set_access_token(&mut self, access_token: impl Into<String>) {
        self.access_token = Some(access_token.into());
    }

    /// Forget the access token
    pub fn clear_access_token(&mut self) {
        self.access_token = None;
    }

    /// Borrow the underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn require_token(&self) -> Result<&str> {
        match self.access_token.as_deref() {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(TelegraphError::MissingAccessToken),
        }
    }
}

impl<T: Transport> TelegraphClient<T> {
    /// Send one API call and unwrap its envelope
    async fn call<R: DeserializeOwned>(&self, method: &str, params: Params) -> Result<Option<R>> {
        debug!("Calling {} with {:?}", method, params.names());

        let body = self.transport.call(method, &params).await?;
        let result = response::decode_envelope(&body);

        if let Err(ref e) = result {
            warn!("{} failed: {}", method, e);
        }
        result
    }
}

impl<T> Clone for TelegraphClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            access_token: self.access_token.clone(),
        }
    }
}

impl<T> fmt::Debug for TelegraphClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegraphClient")
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}
