//! Per-item crawl outcomes
//!
//! This module defines the terminal result produced once for every comic the
//! driver attempts.

use std::fmt;

/// Classification of a failed item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Comic does not exist upstream (HTTP 404), the expected end of a range
    NotFound,

    /// Transport failure or non-2xx status while fetching comic info
    FetchError,

    /// The latest comic number could not be determined
    LatestLookupError,

    /// The comic info payload has no usable image URL
    MissingImageUrl,

    /// The image download failed
    DownloadError,

    /// The image or metadata file could not be written locally
    WriteError,
}

impl FailureKind {
    /// Returns true if this failure is an expected condition rather than a fault
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Returns a short machine-friendly label for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::FetchError => "fetch_error",
            Self::LatestLookupError => "latest_lookup_error",
            Self::MissingImageUrl => "missing_image_url",
            Self::DownloadError => "download_error",
            Self::WriteError => "write_error",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal outcome of crawling a single comic
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrawlResult {
    /// The image is on disk, either freshly downloaded or already present
    Success {
        number: u32,
        filename: String,
        title: String,
        alt_text: String,
        /// True when the image already existed and no download happened
        skipped: bool,
    },

    /// The comic could not be crawled
    Failure {
        number: u32,
        kind: FailureKind,
        message: String,
    },
}

impl CrawlResult {
    /// Returns the comic number this result belongs to
    pub fn number(&self) -> u32 {
        match self {
            Self::Success { number, .. } | Self::Failure { number, .. } => *number,
        }
    }

    /// Returns true for both downloaded and skipped comics
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns true only when the image was already present
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Success { skipped: true, .. })
    }

    /// Returns true when a new image was written during this attempt
    pub fn is_downloaded(&self) -> bool {
        matches!(self, Self::Success { skipped: false, .. })
    }

    /// Returns the failure kind, if any
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Failure { kind, .. } => Some(*kind),
            Self::Success { .. } => None,
        }
    }
}
