use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Main configuration structure for the crawler
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Range and pacing configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// First comic number to crawl
    #[serde(default = "default_start")]
    pub start: u32,

    /// Last comic number to crawl (inclusive); the latest comic when unset
    #[serde(default)]
    pub end: Option<u32>,

    /// Stop after this many new downloads (skips do not count)
    #[serde(rename = "max-comics", default)]
    pub max_comics: Option<u32>,

    /// Pause between consecutive comics, in seconds
    #[serde(default = "default_delay")]
    pub delay: f64,

    /// Timeout for API info requests, in seconds
    ///
    /// Image downloads are only bounded by `connect-timeout`, so large images
    /// on slow links are not cut off.
    #[serde(rename = "request-timeout", default = "default_request_timeout")]
    pub request_timeout: u64,

    /// Connection timeout, in seconds
    #[serde(rename = "connect-timeout", default = "default_connect_timeout")]
    pub connect_timeout: u64,
}

impl CrawlerConfig {
    /// Returns the inter-comic delay as a `Duration`
    ///
    /// Assumes the config has been validated (finite, non-negative).
    pub fn delay_duration(&self) -> Duration {
        Duration::from_secs_f64(self.delay)
    }
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            start: default_start(),
            end: None,
            max_comics: None,
            delay: default_delay(),
            request_timeout: default_request_timeout(),
            connect_timeout: default_connect_timeout(),
        }
    }
}

/// Upstream API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the comic API, without trailing slash
    #[serde(rename = "base-url", default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name", default = "default_crawler_name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version", default = "default_crawler_version")]
    pub crawler_version: String,

    /// Free-form comment shown in parentheses
    #[serde(default = "default_comment")]
    pub comment: String,
}

impl UserAgentConfig {
    /// Formats the User-Agent header value: `Name/Version (Comment)`
    pub fn header_value(&self) -> String {
        format!(
            "{}/{} ({})",
            self.crawler_name, self.crawler_version, self.comment
        )
    }
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: default_crawler_name(),
            crawler_version: default_crawler_version(),
            comment: default_comment(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory that receives images and metadata files
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
        }
    }
}

fn default_start() -> u32 {
    1
}

fn default_delay() -> f64 {
    1.0
}

fn default_request_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_base_url() -> String {
    "https://xkcd.com".to_string()
}

fn default_crawler_name() -> String {
    "XKCD-Crawler".to_string()
}

fn default_crawler_version() -> String {
    "1.0".to_string()
}

fn default_comment() -> String {
    "Educational Purpose".to_string()
}

fn default_directory() -> PathBuf {
    PathBuf::from("xkcd_images")
}
