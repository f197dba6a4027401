use serde::Deserialize;

/// Main configuration structure for Link-Census
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Deadline for a single page fetch (milliseconds)
    #[serde(rename = "fetch-timeout")]
    pub fetch_timeout: u64,

    /// Deadline for establishing a connection (milliseconds)
    #[serde(rename = "connect-timeout")]
    pub connect_timeout: u64,

    /// Deadline for the whole crawl (seconds); unbounded when absent
    #[serde(rename = "crawl-timeout")]
    pub crawl_timeout: Option<u64>,

    /// Maximum number of redirects followed per fetch
    #[serde(rename = "max-redirects")]
    pub max_redirects: u32,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            fetch_timeout: 30_000,
            connect_timeout: 10_000,
            crawl_timeout: None,
            max_redirects: 10,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: Option<String>,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: env!("CARGO_PKG_NAME").to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: None,
        }
    }
}
