//! State module for crawl outcomes
//!
//! # Components
//!
//! - `CrawlResult`: The terminal outcome of one comic (success, skipped or failed)
//! - `FailureKind`: Why a comic failed

mod crawl_result;

// Re-export main types
pub use crawl_result::{CrawlResult, FailureKind};
