//! Main Mail-in-a-Box API client implementation.

use crate::api::{DnsApi, MailApi, SystemApi, UserApi};
use crate::config::{Credentials, DEFAULT_TIMEOUT};
use crate::decode::{self, Decoded, ResponseShape};
use crate::transport::{ApiRequest, ReqwestTransport, Transport};
use mailinabox_core::{MiabError, Result};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Main Mail-in-a-Box admin API client
///
/// Cheap to clone; all clones share the same immutable configuration.
#[derive(Clone)]
pub struct MiabClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    transport: Arc<dyn Transport>,
    base_url: Url,
    email: String,
}

impl std::fmt::Debug for MiabClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MiabClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("email", &self.inner.email)
            .finish_non_exhaustive()
    }
}

impl MiabClient {
    /// Create a new client for the box at `base_url` using default settings
    pub fn new(
        base_url: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        MiabClientBuilder::new(base_url, email, password).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(
        base_url: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> MiabClientBuilder {
        MiabClientBuilder::new(base_url, email, password)
    }

    /// Base URL of the box
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Login address the client authenticates as
    #[must_use]
    pub fn email(&self) -> &str {
        &self.inner.email
    }

    /// Access DNS endpoints
    #[must_use]
    pub const fn dns(&self) -> DnsApi<'_> {
        DnsApi::new(self)
    }

    /// Access mail user and alias endpoints
    #[must_use]
    pub const fn mail(&self) -> MailApi<'_> {
        MailApi::new(self)
    }

    /// Access system endpoints
    #[must_use]
    pub const fn system(&self) -> SystemApi<'_> {
        SystemApi::new(self)
    }

    /// Access login/logout endpoints
    #[must_use]
    pub const fn user(&self) -> UserApi<'_> {
        UserApi::new(self)
    }

    /// Send a request and decode the body with the given shape
    ///
    /// Escape hatch for endpoints this crate does not wrap.
    pub async fn call(&self, request: ApiRequest, shape: ResponseShape) -> Result<Decoded> {
        debug!(method = %request.method, path = %request.path, ?shape, "calling admin API");
        let response = self.inner.transport.send(request).await?;
        decode::decode(&response, shape)
    }

    /// Perform a request whose body is JSON
    pub(crate) async fn json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        self.call(request, ResponseShape::Json).await?.into_json()
    }

    /// Perform a request whose body is bare text
    pub(crate) async fn text(&self, request: ApiRequest) -> Result<String> {
        self.call(request, ResponseShape::PlainText)
            .await?
            .into_text()
    }

    /// Perform a request whose body is an HTML status line
    pub(crate) async fn status_line(&self, request: ApiRequest) -> Result<String> {
        self.call(request, ResponseShape::HtmlStatusLine)
            .await?
            .into_text()
    }
}

/// Builder for configuring a [`MiabClient`]
pub struct MiabClientBuilder {
    base_url: String,
    credentials: Credentials,
    timeout: Duration,
    user_agent: String,
    http: Option<HttpClient>,
    transport: Option<Arc<dyn Transport>>,
}

impl MiabClientBuilder {
    /// Create a new builder for the given box and credentials
    #[must_use]
    pub fn new(
        base_url: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            credentials: Credentials::new(email, password),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("mailinabox-rust/{}", env!("CARGO_PKG_VERSION")),
            http: None,
            transport: None,
        }
    }

    /// Set the request timeout (ignored when a custom HTTP client is given)
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header (ignored when a custom HTTP client is given)
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Use a preconfigured `reqwest` client (TLS, proxies, timeouts)
    #[must_use]
    pub fn http_client(mut self, http: HttpClient) -> Self {
        self.http = Some(http);
        self
    }

    /// Replace the transport entirely
    ///
    /// The transport is then responsible for authentication.
    #[must_use]
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Build the client
    pub fn build(self) -> Result<MiabClient> {
        let base_url = Url::parse(&self.base_url)
            .map_err(|e| MiabError::InvalidUrl(format!("{}: {e}", self.base_url)))?;

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(MiabError::InvalidUrl(format!(
                "{}: scheme must be http or https",
                self.base_url
            )));
        }

        if self.credentials.email.trim().is_empty() {
            return Err(MiabError::Config("email must not be empty".into()));
        }

        let email = self.credentials.email.clone();

        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => {
                let http = match self.http {
                    Some(http) => http,
                    None => HttpClient::builder()
                        .timeout(self.timeout)
                        .user_agent(&self.user_agent)
                        .gzip(true)
                        .build()
                        .map_err(|e| MiabError::Config(e.to_string()))?,
                };
                Arc::new(ReqwestTransport::new(
                    http,
                    base_url.clone(),
                    self.credentials,
                ))
            }
        };

        Ok(MiabClient {
            inner: Arc::new(ClientInner {
                transport,
                base_url,
                email,
            }),
        })
    }
}
