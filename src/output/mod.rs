//! Output module for comic files and run reports
//!
//! This module handles:
//! - Streaming images to disk without leaving partial files behind
//! - Writing per-comic metadata records
//! - Counting outcomes and printing the end-of-run summary

mod files;
pub mod stats;

pub use files::{partial_path, render_metadata, write_image, write_metadata};
pub use stats::{print_summary, CrawlSummary};
