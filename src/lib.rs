//! XKCD Crawler: a polite, sequential comic downloader
//!
//! This crate walks a numbered range of comics exposed through the xkcd JSON
//! API, downloads each comic's image and writes a metadata record next to it,
//! skipping comics whose image is already on disk.

pub mod comic;
pub mod config;
pub mod crawler;
pub mod output;
pub mod state;

use thiserror::Error;

/// Main error type for crawler operations
#[derive(Debug, Error)]
pub enum CrawlerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Fetch(#[from] FetchError),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Metadata serialization error: {0}")]
    Metadata(#[from] serde_json::Error),
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

/// Errors produced at the network boundary
///
/// Every variant maps onto exactly one [`state::FailureKind`], which is what
/// ends up in a per-item [`state::CrawlResult::Failure`].
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Comic {number} not found (404)")]
    NotFound { number: u32 },

    #[error("HTTP error for {url}: {message}")]
    Http { url: String, message: String },

    #[error("Error getting latest comic number: {0}")]
    LatestLookup(String),

    #[error("No image URL found for comic {number}")]
    MissingImageUrl { number: u32 },

    #[error("Error downloading {url}: {message}")]
    Download { url: String, message: String },
}

impl FetchError {
    /// Returns the failure classification for this error
    pub fn kind(&self) -> state::FailureKind {
        use state::FailureKind;

        match self {
            Self::NotFound { .. } => FailureKind::NotFound,
            Self::Http { .. } => FailureKind::FetchError,
            Self::LatestLookup(_) => FailureKind::LatestLookupError,
            Self::MissingImageUrl { .. } => FailureKind::MissingImageUrl,
            Self::Download { .. } => FailureKind::DownloadError,
        }
    }
}

/// Result type alias for crawler operations
pub type Result<T> = std::result::Result<T, CrawlerError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for fetch operations
pub type FetchResult<T> = std::result::Result<T, FetchError>;

// Re-export commonly used types
pub use comic::{ComicInfo, ComicRecord};
pub use config::Config;
pub use crawler::{Coordinator, Fetcher};
pub use output::CrawlSummary;
pub use state::{CrawlResult, FailureKind};
