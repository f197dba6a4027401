//! Configuration module for Link-Census
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every setting has a default, so a crawl can run
//! without any file at all.
//!
//! # Example
//!
//! ```
//! use link_census::config::parse_config;
//!
//! let config = parse_config("[crawler]\nfetch-timeout = 5000\n").unwrap();
//! assert_eq!(config.crawler.fetch_timeout, 5000);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
