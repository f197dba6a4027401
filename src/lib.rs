//! Link-Census: a same-site crawler that counts internal links
//!
//! This crate crawls a website from a seed URL, follows every anchor that
//! stays on the seed's host, and tallies how many times each page is linked
//! to. The network is reached only through an injected [`crawler::Transport`],
//! so the whole engine can be driven deterministically in tests.

pub mod config;
pub mod crawler;
pub mod output;
pub mod url;

use thiserror::Error;

/// Fatal error type for Link-Census operations
///
/// Per-page fetch failures are modelled by [`crawler::CrawlError`] and are
/// absorbed by the traversal. Anything that surfaces as a `CensusError`
/// aborts the crawl.
#[derive(Debug, Error)]
pub enum CensusError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("HTML parse error for {url}: {message}")]
    HtmlParse { url: String, message: String },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL {url:?}: {source}")]
    Parse {
        url: String,
        source: ::url::ParseError,
    },

    #[error("Failed to resolve {href:?} against {base}: {source}")]
    Resolve {
        href: String,
        base: String,
        source: ::url::ParseError,
    },
}

/// Result type alias for Link-Census operations
pub type Result<T> = std::result::Result<T, CensusError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{crawl_site, CrawlError, CrawlOutcome, PagesMap};
pub use output::format_report;
pub use crate::url::{normalize_url, same_domain};
