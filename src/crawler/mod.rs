//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - The transport boundary and its reqwest implementation
//! - Page fetching with response validation
//! - HTML parsing and link extraction
//! - Overall crawl coordination

mod coordinator;
mod error;
mod fetcher;
mod parser;
mod transport;

pub use coordinator::{crawl_site, Coordinator, CrawlOutcome, CrawlStatus, PagesMap};
pub use error::{CrawlError, CrawlErrorKind};
pub use fetcher::{fetch_page, fetch_page_with_timeout};
pub use parser::extract_links;
pub use transport::{
    build_http_client, user_agent_string, HttpTransport, Response, Transport, TransportError,
};
