//! Crawler module for comic fetching and persistence
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with typed failures
//! - The per-comic fetch, skip, download and persist protocol
//! - Sequential range iteration with rate limiting and a download cap

mod coordinator;
mod fetcher;

pub use coordinator::{Coordinator, DOWNLOAD_FAILED_MESSAGE};
pub use fetcher::{build_http_client, Fetcher, ImageStream};

use crate::config::Config;
use crate::output::CrawlSummary;
use crate::state::CrawlResult;
use crate::CrawlerError;

/// Runs a complete range crawl
///
/// This is the main entry point for a crawl. It will:
/// 1. Build the HTTP client and create the output directory
/// 2. Resolve the end of the range (latest comic when unset)
/// 3. Crawl each comic in order, pausing between comics
/// 4. Report the summary
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(CrawlSummary)` - Crawl finished (individual comics may have failed)
/// * `Err(CrawlerError)` - Setup failed or the latest comic was unavailable
pub async fn crawl(config: Config) -> Result<CrawlSummary, CrawlerError> {
    Coordinator::new(config)?.run().await
}

/// Crawls a single comic, ignoring range, cap and delay settings
pub async fn crawl_single(config: Config, number: u32) -> Result<CrawlResult, CrawlerError> {
    let coordinator = Coordinator::new(config)?;
    Ok(coordinator.crawl_comic(number).await)
}
