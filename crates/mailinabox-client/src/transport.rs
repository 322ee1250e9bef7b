//! Authenticated request execution.
//!
//! A [`Transport`] turns an [`ApiRequest`] into a [`RawResponse`]. It never
//! looks at status codes or bodies; that is left to [`crate::decode`].

use crate::config::Credentials;
use async_trait::async_trait;
use mailinabox_core::{MiabError, Result};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Client as HttpClient, Method};
use tracing::{debug, trace};
use url::Url;

/// Bytes escaped in a caller-supplied path segment: all but RFC 3986 unreserved
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode a single path segment such as a record or zone name
///
/// `/`, `?`, `#` and `%` are escaped so the value cannot leave its segment.
/// Empty and dot segments are rejected since they would address another
/// endpoint once the path is normalized.
pub fn path_segment(segment: &str) -> Result<String> {
    if matches!(segment, "" | "." | "..") {
        return Err(MiabError::Transport(format!(
            "cannot build request: invalid path segment {segment:?}"
        )));
    }
    Ok(utf8_percent_encode(segment, SEGMENT).to_string())
}

/// A request against the admin API, relative to the base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,

    /// Path starting with `/admin/`
    pub path: String,

    /// Query string parameters
    pub query: Vec<(String, String)>,

    /// Form-encoded body, if any
    pub form: Option<Vec<(String, String)>>,
}

impl ApiRequest {
    /// Create a request with no query and no body
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            form: None,
        }
    }

    /// GET request
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// POST request
    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// PUT request
    #[must_use]
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// DELETE request
    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Add a form field, turning the body into a form
    #[must_use]
    pub fn form(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.form
            .get_or_insert_with(Vec::new)
            .push((key.into(), value.into()));
        self
    }
}

/// Status code and body bytes as received
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,

    /// Undecoded body
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Create a response
    #[must_use]
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns true for 2xx status codes
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Executes requests against the admin API
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send the request and return whatever came back
    async fn send(&self, request: ApiRequest) -> Result<RawResponse>;
}

/// [`Transport`] backed by `reqwest`, adding Basic-Auth to every request
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: HttpClient,
    base_url: Url,
    credentials: Credentials,
}

impl ReqwestTransport {
    /// Create a transport for the given box
    #[must_use]
    pub const fn new(http: HttpClient, base_url: Url, credentials: Credentials) -> Self {
        Self {
            http,
            base_url,
            credentials,
        }
    }

    /// Base URL requests are resolved against
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a request path against the base URL
    fn url(&self, path: &str) -> Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let raw = format!("{base}{path}");
        Url::parse(&raw)
            .map_err(|e| MiabError::Transport(format!("cannot build request for {raw}: {e}")))
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse> {
        let url = self.url(&request.path)?;
        debug!(method = %request.method, url = %url, "admin API request");

        let mut builder = self
            .http
            .request(request.method, url)
            .basic_auth(&self.credentials.email, Some(&self.credentials.password));

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        if let Some(form) = &request.form {
            builder = builder.form(form);
        }

        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(transport_error)?;
        trace!(status, len = body.len(), "admin API response");

        Ok(RawResponse::new(status, body.to_vec()))
    }
}

fn transport_error(err: reqwest::Error) -> MiabError {
    if err.is_timeout() {
        MiabError::Transport(format!("request timed out: {err}"))
    } else {
        MiabError::Transport(err.to_string())
    }
}
