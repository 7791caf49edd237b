//! XKCD Crawler main entry point
//!
//! This is the command-line interface for the comic crawler.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use xkcd_crawler::config::{load_config, validate, Config};
use xkcd_crawler::crawler::{crawl, crawl_single};
use xkcd_crawler::{CrawlResult, CrawlerError};

/// XKCD Crawler: download xkcd comics and their metadata
///
/// Comics are fetched one at a time with a pause between requests. Images
/// that already exist in the output directory are skipped.
#[derive(Parser, Debug)]
#[command(name = "xkcd-crawler")]
#[command(version = "1.0.0")]
#[command(about = "Crawl XKCD comics and download images", long_about = None)]
struct Cli {
    /// Optional TOML configuration file; flags override its values
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Starting comic number (default: 1)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    start: Option<u32>,

    /// Ending comic number (default: latest)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    end: Option<u32>,

    /// Maximum number of comics to download
    #[arg(long = "max", value_parser = clap::value_parser!(u32).range(1..))]
    max_comics: Option<u32>,

    /// Output directory (default: xkcd_images)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Delay between requests in seconds (default: 1.0)
    #[arg(long)]
    delay: Option<f64>,

    /// Download a single comic by number
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    single: Option<u32>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    /// Loads the config file (if any) and layers the command-line flags on top
    fn resolve_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => load_config(path)
                .with_context(|| format!("Failed to load {}", path.display()))?,
            None => Config::default(),
        };

        if let Some(start) = self.start {
            config.crawler.start = start;
        }
        if let Some(end) = self.end {
            config.crawler.end = Some(end);
        }
        if let Some(max) = self.max_comics {
            config.crawler.max_comics = Some(max);
        }
        if let Some(delay) = self.delay {
            config.crawler.delay = delay;
        }
        if let Some(output) = &self.output {
            config.output.directory = output.clone();
        }

        validate(&config).context("Invalid configuration")?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = cli.resolve_config()?;
    tracing::debug!("Resolved configuration: {:?}", config);

    match cli.single {
        Some(number) => handle_single(config, number).await,
        None => handle_crawl(config).await,
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("xkcd_crawler=info,warn"),
            1 => EnvFilter::new("xkcd_crawler=debug,info"),
            2 => EnvFilter::new("xkcd_crawler=trace,debug"),
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

/// Handles the --single mode
async fn handle_single(config: Config, number: u32) -> anyhow::Result<()> {
    let result = crawl_single(config, number).await?;

    if result.is_success() {
        println!("Single comic downloaded successfully!");
    } else if let CrawlResult::Failure { message, .. } = result {
        println!("Failed to download comic {}: {}", number, message);
    }

    Ok(())
}

/// Handles the range crawl
///
/// A failed latest-comic lookup ends the run without crawling anything, but is
/// not treated as a process failure. The coordinator has already logged it.
async fn handle_crawl(config: Config) -> anyhow::Result<()> {
    match crawl(config).await {
        Ok(_) => Ok(()),
        Err(CrawlerError::Fetch(_)) => Ok(()),
        Err(e) => Err(e.into()),
    }
}
