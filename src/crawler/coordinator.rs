//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the crawl loop that ties together:
//! - The frontier of discovered URLs (a LIFO stack, so the walk is depth-first)
//! - The occurrence map keyed by normalized URL
//! - Fetching, link extraction and same-site filtering
//! - Per-page error handling and cancellation

use crate::config::CrawlerConfig;
use crate::crawler::error::{CrawlError, CrawlErrorKind};
use crate::crawler::fetcher::fetch_page_with_timeout;
use crate::crawler::parser::extract_links;
use crate::crawler::transport::Transport;
use crate::url::{normalize_url, same_domain};
use crate::UrlError;
use std::collections::HashMap;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use url::Url;

/// Occurrence count per normalized URL
pub type PagesMap = HashMap<String, u32>;

/// How a traversal ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlStatus {
    /// The frontier was exhausted
    Completed,
    /// The cancellation token fired before the frontier was exhausted
    Cancelled,
}

/// Result of a traversal
#[derive(Debug, Clone)]
pub struct CrawlOutcome {
    /// Occurrence count per normalized URL
    pub pages: PagesMap,

    /// Whether the crawl ran to completion
    pub status: CrawlStatus,

    /// Number of times the page fetcher was invoked
    pub fetch_attempts: u32,

    /// Pages skipped because of a fetch error, HTTP error or missing body
    pub skipped: u32,

    /// URLs still waiting in the frontier when the crawl stopped
    pub remaining: usize,
}

/// Main crawler coordinator structure
///
/// The coordinator owns the injected transport and drives one sequential
/// crawl per call to [`Coordinator::run`]. A page is fetched at most once;
/// every later link to it only bumps its count.
pub struct Coordinator<T> {
    transport: T,
    fetch_timeout: Duration,
    cancel: CancellationToken,
}

impl<T: Transport> Coordinator<T> {
    /// Creates a new coordinator instance
    ///
    /// # Arguments
    ///
    /// * `transport` - The transport used for every fetch
    /// * `config` - Crawler settings (the per-fetch deadline is taken from here)
    pub fn new(transport: T, config: &CrawlerConfig) -> Self {
        Self {
            transport,
            fetch_timeout: Duration::from_millis(config.fetch_timeout),
            cancel: CancellationToken::new(),
        }
    }

    /// Replaces the cancellation token used to abort the crawl
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Runs the crawl loop from a seed URL
    ///
    /// This is the core crawling logic that:
    /// 1. Pops the most recently discovered URL from the frontier
    /// 2. Counts a revisit, or records a first visit and fetches the page
    /// 3. Extracts links, keeps those on the seed's host, and pushes them
    ///
    /// Classified fetch failures are logged and the page's links are
    /// skipped. Any other failure aborts the crawl and is returned.
    pub async fn run(&self, seed: &str) -> crate::Result<CrawlOutcome> {
        let seed_url = Url::parse(seed).map_err(|source| UrlError::Parse {
            url: seed.to_string(),
            source,
        })?;

        tracing::info!("Starting crawl of {}", seed);

        let mut frontier: Vec<String> = vec![seed.to_string()];
        let mut pages = PagesMap::new();
        let mut fetch_attempts = 0;
        let mut skipped = 0;
        let mut status = CrawlStatus::Completed;

        while !frontier.is_empty() {
            if self.cancel.is_cancelled() {
                status = CrawlStatus::Cancelled;
                break;
            }
            let Some(url) = frontier.pop() else { break };

            let normalized = normalize_url(&url)?;
            if let Some(count) = pages.get_mut(&normalized) {
                *count += 1;
                tracing::debug!("Already visited {} ({} links so far)", normalized, count);
                continue;
            }
            pages.insert(normalized, 1);

            tracing::info!("Crawling {}", url);
            fetch_attempts += 1;

            let fetched = tokio::select! {
                _ = self.cancel.cancelled() => {
                    status = CrawlStatus::Cancelled;
                    break;
                }
                result = fetch_page_with_timeout(&self.transport, &url, self.fetch_timeout) => result,
            };

            let body = match fetched {
                Ok(body) => body,
                Err(e) => {
                    if counts_as_skip(&e) {
                        skipped += 1;
                    }
                    tracing::warn!("Skipping {} [{}]: {}", url, e.kind(), e);
                    continue;
                }
            };

            for link in extract_links(&body, &url)? {
                let link_url = Url::parse(&link).map_err(|source| UrlError::Parse {
                    url: link.clone(),
                    source,
                })?;

                if same_domain(&seed_url, &link_url) {
                    frontier.push(link);
                } else {
                    tracing::debug!("Ignoring off-site link {}", link);
                }
            }
        }

        match status {
            CrawlStatus::Completed => tracing::info!(
                "Crawl completed: {} pages found, {} fetched, {} skipped",
                pages.len(),
                fetch_attempts,
                skipped
            ),
            CrawlStatus::Cancelled => tracing::warn!(
                "Crawl cancelled with {} URLs left in the frontier: {} pages found so far",
                frontier.len(),
                pages.len()
            ),
        }

        Ok(CrawlOutcome {
            pages,
            status,
            fetch_attempts,
            skipped,
            remaining: frontier.len(),
        })
    }
}

/// Content-type mismatches are expected on any site and are not counted
fn counts_as_skip(error: &CrawlError) -> bool {
    error.kind() != CrawlErrorKind::UnexpectedContentType
}

/// Crawls a site and returns the occurrence map
///
/// Convenience wrapper around [`Coordinator`] with default settings.
///
/// # Example
///
/// ```no_run
/// use link_census::config::Config;
/// use link_census::crawler::{crawl_site, HttpTransport};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Config::default();
/// let transport = HttpTransport::from_config(&config.crawler, &config.user_agent)?;
/// let pages = crawl_site("https://example.com", &transport).await?;
/// println!("Found {} pages", pages.len());
/// # Ok(())
/// # }
/// ```
pub async fn crawl_site<T: Transport>(seed: &str, transport: T) -> crate::Result<PagesMap> {
    let coordinator = Coordinator::new(transport, &CrawlerConfig::default());
    Ok(coordinator.run(seed).await?.pages)
}
