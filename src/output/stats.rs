//! Run statistics
//!
//! This module keeps the per-run counters and prints the end-of-run report.

use crate::state::CrawlResult;

/// Counters for one crawl run
///
/// Counters only ever go up; a fresh summary is created for each run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrawlSummary {
    /// Comics whose image was newly downloaded
    pub success_count: u32,

    /// Comics whose image already existed
    pub skipped_count: u32,

    /// Comics that failed for any reason
    pub failed_count: u32,
}

impl CrawlSummary {
    /// Creates an empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one item's outcome
    pub fn record(&mut self, result: &CrawlResult) {
        match result {
            CrawlResult::Success { skipped: true, .. } => self.skipped_count += 1,
            CrawlResult::Success { skipped: false, .. } => self.success_count += 1,
            CrawlResult::Failure { .. } => self.failed_count += 1,
        }
    }

    /// Total number of comics attempted
    pub fn total(&self) -> u32 {
        self.success_count + self.skipped_count + self.failed_count
    }

    /// Returns true once `max` new downloads have happened
    pub fn reached_cap(&self, max: Option<u32>) -> bool {
        max.is_some_and(|max| self.success_count >= max)
    }
}

/// Prints the summary to stdout in a formatted manner
pub fn print_summary(summary: &CrawlSummary) {
    println!();
    println!("Crawling completed!");
    println!("Successfully downloaded: {}", summary.success_count);
    println!("Skipped (already existed): {}", summary.skipped_count);
    println!("Failed: {}", summary.failed_count);
    println!("Total attempted: {}", summary.total());
}
