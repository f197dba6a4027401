//! Link-Census main entry point
//!
//! This is the command-line interface for the Link-Census crawler.

use anyhow::Context;
use clap::Parser;
use link_census::config::{load_config_with_hash, Config};
use link_census::crawler::{Coordinator, CrawlStatus, HttpTransport};
use link_census::output::format_report;
use std::path::PathBuf;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

/// Link-Census: count the internal links of a website
///
/// Crawls every page reachable from URL on the same host and reports how
/// many internal links point to each page. Only URL is required; the
/// config file and verbosity flags are optional extras with working
/// defaults.
#[derive(Parser, Debug)]
#[command(name = "link-census")]
#[command(version)]
#[command(about = "Count the internal links of a website", long_about = None)]
struct Cli {
    /// Base URL to crawl for links
    #[arg(value_name = "URL")]
    url: String,

    /// Path to an optional TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    println!("Crawler is starting using a base URL of \"{}\"...", cli.url);

    let transport = HttpTransport::from_config(&config.crawler, &config.user_agent)
        .context("failed to build HTTP client")?;

    let cancel = CancellationToken::new();
    spawn_cancellation(cancel.clone(), config.crawler.crawl_timeout);

    let coordinator = Coordinator::new(transport, &config.crawler).with_cancellation(cancel);

    let outcome = match coordinator.run(&cli.url).await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            return Err(e).with_context(|| format!("crawl of {} aborted", cli.url));
        }
    };

    if outcome.status == CrawlStatus::Cancelled {
        tracing::warn!("Crawl was cancelled; the report below is partial");
    }

    println!("{}", format_report(&outcome.pages));

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("link_census=info,warn"),
            1 => EnvFilter::new("link_census=debug,info"),
            2 => EnvFilter::new("link_census=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Cancels the crawl on Ctrl-C or once the crawl deadline passes
fn spawn_cancellation(cancel: CancellationToken, crawl_timeout: Option<u64>) {
    tokio::spawn(async move {
        let deadline = async {
            match crawl_timeout {
                Some(secs) => tokio::time::sleep(Duration::from_secs(secs)).await,
                None => std::future::pending().await,
            }
        };

        tokio::select! {
            result = tokio::signal::ctrl_c() => {
                if let Err(e) = result {
                    tracing::error!("Failed to listen for Ctrl-C: {}", e);
                    return;
                }
                tracing::warn!("Interrupted, stopping crawl");
            }
            _ = deadline => {
                tracing::warn!("Crawl deadline reached, stopping crawl");
            }
        }

        cancel.cancel();
    });
}
