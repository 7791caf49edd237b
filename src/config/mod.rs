//! Configuration module for the crawler
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. Every setting has a default, so a configuration file is optional;
//! the binary layers command-line flags on top and validates the result.
//!
//! # Example
//!
//! ```no_run
//! use xkcd_crawler::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("crawler.toml")).unwrap();
//! println!("Images will be saved to: {}", config.output.directory.display());
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{ApiConfig, Config, CrawlerConfig, OutputConfig, UserAgentConfig};

// Re-export parser and validation functions
pub use parser::{load_config, parse_config};
pub use validation::validate;
