//! Page fetcher
//!
//! This module performs one fetch through the injected transport and
//! validates the response. Checks run in a fixed order and stop at the
//! first failure:
//!
//! | Order | Condition | Error |
//! |-------|-----------|-------|
//! | 1 | Transport raised an error (or the deadline passed) | `Fetch` |
//! | 2 | Status >= 400 | `ErrorResponse` |
//! | 3 | Content-Type not `text/html` / `text/html; charset=utf-8` | `UnexpectedContentType` |
//! | 4 | No body | `NoBody` |
//!
//! Nothing is retried here.

use crate::crawler::error::CrawlError;
use crate::crawler::transport::{Transport, TransportError};
use std::time::Duration;

/// Content types accepted as HTML, compared exactly
const HTML_CONTENT_TYPES: &[&str] = &["text/html", "text/html; charset=utf-8"];

/// Fetches a page and returns its body text
///
/// # Arguments
///
/// * `transport` - The transport used for the request
/// * `url` - The URL to fetch, as discovered (not normalized)
///
/// # Returns
///
/// * `Ok(String)` - The page body
/// * `Err(CrawlError)` - The first validation that failed
pub async fn fetch_page<T>(transport: &T, url: &str) -> Result<String, CrawlError>
where
    T: Transport + ?Sized,
{
    let response = transport
        .fetch(url)
        .await
        .map_err(|source| CrawlError::Fetch {
            url: url.to_string(),
            source,
        })?;

    if response.status >= 400 {
        return Err(CrawlError::ErrorResponse {
            url: url.to_string(),
            response,
        });
    }

    let content_type = response.content_type().to_string();
    if !HTML_CONTENT_TYPES.contains(&content_type.as_str()) {
        return Err(CrawlError::UnexpectedContentType {
            url: url.to_string(),
            response,
            content_type,
        });
    }

    match response.body {
        Some(body) => Ok(body),
        None => Err(CrawlError::NoBody {
            url: url.to_string(),
            response,
        }),
    }
}

/// Fetches a page, failing with a timeout fetch error past `deadline`
pub async fn fetch_page_with_timeout<T>(
    transport: &T,
    url: &str,
    deadline: Duration,
) -> Result<String, CrawlError>
where
    T: Transport + ?Sized,
{
    match tokio::time::timeout(deadline, fetch_page(transport, url)).await {
        Ok(result) => result,
        Err(_) => Err(CrawlError::Fetch {
            url: url.to_string(),
            source: TransportError::Timeout(deadline),
        }),
    }
}
