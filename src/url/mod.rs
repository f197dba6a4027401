//! URL handling module for Link-Census
//!
//! This module provides URL normalization and the same-site check used to
//! scope the crawl.

mod domain;
mod normalize;

// Re-export main functions
pub use domain::{host_key, same_domain};
pub use normalize::normalize_url;
