//! Crawl coordinator - the per-comic protocol and the range loop
//!
//! Every comic goes through the same steps:
//! - Fetch its info payload
//! - Derive the local filename
//! - Skip it if the image is already on disk
//! - Stream the image to disk and write the metadata record
//!
//! Comics are processed strictly one at a time, with a fixed pause between
//! consecutive comics so at most one request is ever in flight.

use crate::config::{Config, CrawlerConfig};
use crate::crawler::Fetcher;
use crate::output::{print_summary, write_image, write_metadata, CrawlSummary};
use crate::state::{CrawlResult, FailureKind};
use crate::{CrawlerError, FetchError};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Message reported for every failed image download
pub const DOWNLOAD_FAILED_MESSAGE: &str = "Failed to download image";

/// Main crawler coordinator structure
pub struct Coordinator {
    crawler: CrawlerConfig,
    output_dir: PathBuf,
    fetcher: Fetcher,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// Builds the HTTP client and creates the output directory if it does not
    /// exist yet.
    ///
    /// # Arguments
    ///
    /// * `config` - The crawler configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(CrawlerError)` - Failed to build the client or the directory
    pub fn new(config: Config) -> Result<Self, CrawlerError> {
        let fetcher = Fetcher::new(&config)?;
        Self::with_fetcher(config, fetcher)
    }

    /// Creates a coordinator around an existing fetcher
    pub fn with_fetcher(config: Config, fetcher: Fetcher) -> Result<Self, CrawlerError> {
        std::fs::create_dir_all(&config.output.directory)?;

        Ok(Self {
            crawler: config.crawler,
            output_dir: config.output.directory,
            fetcher,
        })
    }

    /// Directory receiving images and metadata
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Runs the configured range crawl
    ///
    /// When no end is configured, the latest comic number is looked up first;
    /// if that lookup fails the whole crawl is aborted before any comic is
    /// touched. Per-comic failures never abort the crawl.
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlSummary)` - Counters for the run
    /// * `Err(CrawlerError)` - The latest comic number could not be determined
    pub async fn run(&self) -> Result<CrawlSummary, CrawlerError> {
        let start = self.crawler.start;
        let end = match self.crawler.end {
            Some(end) => end,
            None => match self.fetcher.latest_comic_number().await {
                Ok(latest) => latest,
                Err(e) => {
                    tracing::error!("Could not determine latest comic number: {}", e);
                    return Err(e.into());
                }
            },
        };

        tracing::info!("Starting crawl from comic {} to {}", start, end);
        tracing::info!("Output directory: {}", self.output_dir.display());
        tracing::info!("Rate limit delay: {} seconds", self.crawler.delay);

        let summary = self.crawl_range(start, end).await;

        tracing::info!(
            "Crawl completed: {} downloaded, {} skipped, {} failed",
            summary.success_count,
            summary.skipped_count,
            summary.failed_count
        );
        print_summary(&summary);

        Ok(summary)
    }

    /// Crawls comics `start..=end` in order
    ///
    /// Stops early once the configured cap of new downloads is reached; the cap
    /// is checked before each comic, never in the middle of one. The delay is
    /// applied after every comic except `end`.
    pub async fn crawl_range(&self, start: u32, end: u32) -> CrawlSummary {
        let mut summary = CrawlSummary::new();
        let delay = self.crawler.delay_duration();

        for number in start..=end {
            if summary.reached_cap(self.crawler.max_comics) {
                tracing::info!(
                    "Reached maximum of {} comics downloaded.",
                    summary.success_count
                );
                break;
            }

            let result = self.crawl_comic(number).await;
            summary.record(&result);

            if number < end && !delay.is_zero() {
                tracing::trace!("Sleeping {:?} before comic {}", delay, number + 1);
                tokio::time::sleep(delay).await;
            }
        }

        summary
    }

    /// Crawls a single comic
    ///
    /// Never fails: every error is folded into a [`CrawlResult::Failure`].
    pub async fn crawl_comic(&self, number: u32) -> CrawlResult {
        tracing::info!("Crawling comic {}...", number);

        let result = self.process_comic(number).await;

        if let CrawlResult::Failure { kind, message, .. } = &result {
            if kind.is_expected() {
                tracing::info!("  Comic {} failed: {}", result.number(), message);
            } else {
                tracing::warn!("  Comic {} failed: {}", result.number(), message);
            }
        }

        result
    }

    async fn process_comic(&self, number: u32) -> CrawlResult {
        let record = match self.fetcher.comic_info(number).await {
            Ok(record) => record,
            Err(e) => return failure(number, &e),
        };

        let image_path = self.output_dir.join(&record.local_filename);

        // Only the image gates the skip; a missing metadata file is not regenerated
        let exists = match fs::try_exists(&image_path).await {
            Ok(exists) => exists,
            Err(e) => return write_failure(number, &image_path, &e.into()),
        };

        if exists {
            tracing::info!("  Image already exists: {}", record.local_filename);
            return CrawlResult::Success {
                number,
                filename: record.local_filename,
                title: record.title,
                alt_text: record.alt_text,
                skipped: true,
            };
        }

        let mut stream = match self.fetcher.download(&record.image_url).await {
            Ok(stream) => stream,
            Err(e) => {
                tracing::warn!("{}", e);
                return download_failure(number);
            }
        };

        tracing::debug!(
            "Downloading {} ({} bytes announced)",
            stream.url(),
            stream
                .content_length()
                .map_or_else(|| "no length".to_string(), |len| len.to_string())
        );

        match write_image(&mut stream, &image_path).await {
            Ok(bytes) => tracing::debug!("Wrote {} bytes to {}", bytes, image_path.display()),
            Err(CrawlerError::Fetch(e)) => {
                tracing::warn!("{}", e);
                return download_failure(number);
            }
            Err(e) => return write_failure(number, &image_path, &e),
        }

        tracing::info!("  Downloaded: {}", record.local_filename);

        if let Err(e) = write_metadata(&self.output_dir, &record).await {
            return write_failure(number, &self.output_dir, &e);
        }

        CrawlResult::Success {
            number,
            filename: record.local_filename,
            title: record.title,
            alt_text: record.alt_text,
            skipped: false,
        }
    }
}

fn failure(number: u32, error: &FetchError) -> CrawlResult {
    CrawlResult::Failure {
        number,
        kind: error.kind(),
        message: error.to_string(),
    }
}

fn download_failure(number: u32) -> CrawlResult {
    CrawlResult::Failure {
        number,
        kind: FailureKind::DownloadError,
        message: DOWNLOAD_FAILED_MESSAGE.to_string(),
    }
}

fn write_failure(number: u32, path: &Path, error: &CrawlerError) -> CrawlResult {
    CrawlResult::Failure {
        number,
        kind: FailureKind::WriteError,
        message: format!("Failed to write {}: {}", path.display(), error),
    }
}
