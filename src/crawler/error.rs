//! Classified page fetch failures
//!
//! Every way a single page can fail to yield HTML is one variant of
//! [`CrawlError`]. The traversal matches on these, logs them, and moves on;
//! they never abort a crawl.

use crate::crawler::transport::{Response, TransportError};
use std::fmt;
use thiserror::Error;

/// Discriminant of a [`CrawlError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrawlErrorKind {
    /// The transport itself failed
    FetchError,
    /// The server answered with status >= 400
    ErrorResponse,
    /// The response is not an HTML page
    UnexpectedContentType,
    /// The response carried no body
    NoBody,
}

impl CrawlErrorKind {
    /// Stable code for this kind, suitable for logs and machine output
    pub fn code(&self) -> &'static str {
        match self {
            Self::FetchError => "FETCH_ERROR",
            Self::ErrorResponse => "ERROR_RESPONSE",
            Self::UnexpectedContentType => "UNEXPECTED_CONTENT_TYPE",
            Self::NoBody => "NO_BODY",
        }
    }
}

impl fmt::Display for CrawlErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A page fetch failure with the data needed to decide what to do about it
#[derive(Debug, Error)]
pub enum CrawlError {
    /// The transport raised an error
    #[error("Failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: TransportError,
    },

    /// The response status was >= 400
    #[error("Error response from {url}: {} {}", .response.status, .response.status_text)]
    ErrorResponse { url: String, response: Response },

    /// The Content-Type was neither `text/html` nor `text/html; charset=utf-8`
    #[error("Unexpected content type from {url}: {content_type:?}")]
    UnexpectedContentType {
        url: String,
        response: Response,
        content_type: String,
    },

    /// The response had no body
    #[error("No body in response from {url}")]
    NoBody { url: String, response: Response },
}

impl CrawlError {
    /// Returns the kind of this error
    pub fn kind(&self) -> CrawlErrorKind {
        match self {
            Self::Fetch { .. } => CrawlErrorKind::FetchError,
            Self::ErrorResponse { .. } => CrawlErrorKind::ErrorResponse,
            Self::UnexpectedContentType { .. } => CrawlErrorKind::UnexpectedContentType,
            Self::NoBody { .. } => CrawlErrorKind::NoBody,
        }
    }

    /// The URL whose fetch failed
    pub fn url(&self) -> &str {
        match self {
            Self::Fetch { url, .. }
            | Self::ErrorResponse { url, .. }
            | Self::UnexpectedContentType { url, .. }
            | Self::NoBody { url, .. } => url,
        }
    }

    /// The response, for every kind except a transport failure
    pub fn response(&self) -> Option<&Response> {
        match self {
            Self::Fetch { .. } => None,
            Self::ErrorResponse { response, .. }
            | Self::UnexpectedContentType { response, .. }
            | Self::NoBody { response, .. } => Some(response),
        }
    }
}
