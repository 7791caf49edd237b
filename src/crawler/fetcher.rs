//! HTTP fetcher implementation
//!
//! This module is the crawler's network boundary. It handles:
//! - Building the HTTP client with the configured user agent
//! - Looking up the latest comic number
//! - Fetching per-comic info payloads
//! - Opening image downloads as chunked streams
//! - Error classification
//!
//! Nothing here panics or returns transport errors raw; every failure is
//! translated into a [`FetchError`].

use crate::comic::{ComicInfo, ComicRecord, LatestComic};
use crate::config::Config;
use crate::{CrawlerError, FetchError};
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Builds an HTTP client with proper configuration
///
/// Only the connect timeout is set client-wide. The request timeout is applied
/// per request by [`Fetcher`] to the API calls, so image downloads are not cut
/// off while their body is still streaming.
///
/// # Arguments
///
/// * `config` - The crawler configuration (user agent and timeouts)
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &Config) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.header_value())
        .connect_timeout(Duration::from_secs(config.crawler.connect_timeout))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Describes a transport error in a short, human-readable way
fn describe_transport_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        "Request timeout".to_string()
    } else if e.is_connect() {
        "Connection refused".to_string()
    } else {
        e.to_string()
    }
}

/// Fetches comic info and images from the upstream API
///
/// Holds an immutable, preconfigured client; cloning is cheap and shares the
/// underlying connection pool.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    base_url: String,
    request_timeout: Duration,
}

impl Fetcher {
    /// Creates a fetcher from the crawler configuration
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = build_http_client(config)?;
        Ok(Self::with_client(
            client,
            &config.api.base_url,
            Duration::from_secs(config.crawler.request_timeout),
        ))
    }

    /// Creates a fetcher around an existing client
    ///
    /// `request_timeout` bounds each API request; image downloads are unbounded.
    pub fn with_client(client: Client, base_url: &str, request_timeout: Duration) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            request_timeout,
        }
    }

    /// URL of the latest comic's info payload
    pub fn latest_url(&self) -> String {
        format!("{}/info.0.json", self.base_url)
    }

    /// URL of a specific comic's info payload
    pub fn comic_url(&self, number: u32) -> String {
        format!("{}/{}/info.0.json", self.base_url, number)
    }

    /// Returns the number of the most recent comic
    ///
    /// Transport errors, non-2xx statuses and malformed payloads all become
    /// [`FetchError::LatestLookup`].
    pub async fn latest_comic_number(&self) -> Result<u32, FetchError> {
        let url = self.latest_url();

        let response = self
            .client
            .get(&url)
            .timeout(self.request_timeout)
            .send()
            .await
            .map_err(|e| FetchError::LatestLookup(describe_transport_error(&e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::LatestLookup(format!("HTTP {}", status.as_u16())));
        }

        let latest: LatestComic = response
            .json()
            .await
            .map_err(|e| FetchError::LatestLookup(e.to_string()))?;

        tracing::debug!("Latest comic is {}", latest.num);
        Ok(latest.num)
    }

    /// Fetches and resolves the info payload of one comic
    ///
    /// # Returns
    ///
    /// * `Ok(ComicRecord)` - Resolved comic with its local filename
    /// * `Err(FetchError::NotFound)` - HTTP 404
    /// * `Err(FetchError::Http)` - Other non-2xx status, transport or parse error
    /// * `Err(FetchError::MissingImageUrl)` - Payload has no usable image URL
    pub async fn comic_info(&self, number: u32) -> Result<ComicRecord, FetchError> {
        let url = self.comic_url(number);

        let response = match self
            .client
            .get(&url)
            .timeout(self.request_timeout)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                return Err(FetchError::Http {
                    message: describe_transport_error(&e),
                    url,
                })
            }
        };

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound { number });
        }

        if !status.is_success() {
            return Err(FetchError::Http {
                url,
                message: format!("HTTP {}", status.as_u16()),
            });
        }

        let info: ComicInfo = match response.json().await {
            Ok(info) => info,
            Err(e) => {
                return Err(FetchError::Http {
                    url,
                    message: format!("Invalid comic info: {}", e),
                })
            }
        };

        ComicRecord::from_info(number, info)
    }

    /// Opens an image download without buffering the body
    ///
    /// The returned stream yields the body chunk by chunk, so peak memory is
    /// bounded by the chunk size rather than the image size.
    pub async fn download(&self, url: &str) -> Result<ImageStream, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Download {
                url: url.to_string(),
                message: describe_transport_error(&e),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Download {
                url: url.to_string(),
                message: format!("HTTP {}", status.as_u16()),
            });
        }

        Ok(ImageStream {
            url: url.to_string(),
            response,
        })
    }
}

/// Chunked body of an in-flight image download
#[derive(Debug)]
pub struct ImageStream {
    url: String,
    response: Response,
}

impl ImageStream {
    /// URL being downloaded
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Content length announced by the server, if any
    pub fn content_length(&self) -> Option<u64> {
        self.response.content_length()
    }

    /// Copies the body into `writer` chunk by chunk
    ///
    /// Returns the number of bytes written. Body errors surface as
    /// [`CrawlerError::Fetch`] and writer errors as [`CrawlerError::Io`], so
    /// callers can tell a failed download from a failed write.
    pub async fn copy_to<W>(&mut self, writer: &mut W) -> Result<u64, CrawlerError>
    where
        W: AsyncWrite + Unpin,
    {
        let mut written = 0u64;

        while let Some(chunk) = self
            .response
            .chunk()
            .await
            .map_err(|e| FetchError::Download {
                url: self.url.clone(),
                message: describe_transport_error(&e),
            })?
        {
            writer.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }

        writer.flush().await?;
        Ok(written)
    }
}
