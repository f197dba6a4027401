//! Network boundary of the crawler
//!
//! The crawl engine never talks to the network directly. It receives a
//! [`Transport`] and asks it for one [`Response`] per URL. Production runs
//! use [`HttpTransport`]; tests substitute an in-memory implementation.

use crate::config::{CrawlerConfig, UserAgentConfig};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{redirect::Policy, Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

/// Failure raised by a transport while performing a request
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("{0}")]
    Other(String),
}

/// A fully received HTTP response
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code
    pub status: u16,

    /// Reason phrase for the status code (may be empty)
    pub status_text: String,

    /// Response headers
    pub headers: HeaderMap,

    /// Response body, `None` when the status carries no payload
    pub body: Option<String>,
}

impl Response {
    /// Creates an empty response with the given status
    pub fn new(status: u16) -> Self {
        let status_text = StatusCode::from_u16(status)
            .ok()
            .and_then(|code| code.canonical_reason())
            .unwrap_or_default()
            .to_string();

        Self {
            status,
            status_text,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Adds a header, ignoring names or values that are not valid HTTP
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        if let (Ok(name), Ok(value)) = (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            self.headers.insert(name, value);
        }
        self
    }

    /// Sets the response body
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Returns the Content-Type header, or an empty string when missing
    pub fn content_type(&self) -> &str {
        self.headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
    }
}

/// Capability that turns a URL into an HTTP response
///
/// Any error returned here is reported by the fetcher as a fetch error,
/// whatever its cause.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs a single GET request for `url`
    async fn fetch(&self, url: &str) -> Result<Response, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for &T {
    async fn fetch(&self, url: &str) -> Result<Response, TransportError> {
        (**self).fetch(url).await
    }
}

/// Formats the User-Agent header value
///
/// Format: `CrawlerName/Version` or `CrawlerName/Version (+ContactURL)`
pub fn user_agent_string(config: &UserAgentConfig) -> String {
    match &config.contact_url {
        Some(contact) => format!(
            "{}/{} (+{})",
            config.crawler_name, config.crawler_version, contact
        ),
        None => format!("{}/{}", config.crawler_name, config.crawler_version),
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `crawler` - Timeouts and redirect limits
/// * `user_agent` - The user agent configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(
    crawler: &CrawlerConfig,
    user_agent: &UserAgentConfig,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent_string(user_agent))
        .connect_timeout(Duration::from_millis(crawler.connect_timeout))
        .redirect(Policy::limited(crawler.max_redirects as usize))
        .gzip(true)
        .brotli(true)
        .build()
}

/// [`Transport`] backed by a reqwest client
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Wraps an existing client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a client from configuration and wraps it
    pub fn from_config(
        crawler: &CrawlerConfig,
        user_agent: &UserAgentConfig,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self::new(build_http_client(crawler, user_agent)?))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, url: &str) -> Result<Response, TransportError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.bytes().await?;

        Ok(Response {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            headers,
            body: body_for(status, &bytes),
        })
    }
}

/// Only statuses that forbid a payload have no body; an empty 200 is `Some("")`
fn body_for(status: StatusCode, bytes: &[u8]) -> Option<String> {
    match status {
        StatusCode::NO_CONTENT | StatusCode::RESET_CONTENT | StatusCode::NOT_MODIFIED => None,
        _ => Some(String::from_utf8_lossy(bytes).into_owned()),
    }
}
