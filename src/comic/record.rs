use crate::comic::filename::image_filename;
use crate::FetchError;
use serde::{Deserialize, Serialize};

/// Comic info payload as served by `/<number>/info.0.json`
///
/// Only the consumed fields are modelled; anything else in the payload is
/// ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComicInfo {
    #[serde(default)]
    pub num: Option<u32>,

    #[serde(default)]
    pub img: Option<String>,

    #[serde(default)]
    pub safe_title: Option<String>,

    #[serde(default)]
    pub alt: Option<String>,
}

/// Payload of the `/info.0.json` endpoint, of which only the number is used
#[derive(Debug, Clone, Deserialize)]
pub struct LatestComic {
    pub num: u32,
}

/// A comic resolved from its info payload
///
/// Built once per successful info fetch and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComicRecord {
    pub number: u32,
    pub title: String,
    pub alt_text: String,
    pub image_url: String,
    pub local_filename: String,
}

impl ComicRecord {
    /// Resolves a record for `number` from its info payload
    ///
    /// The requested number is authoritative; a differing `info.num` is only
    /// logged. A missing title falls back to `comic_<number>` and missing alt
    /// text to an empty string, but an absent or empty image URL is an error.
    pub fn from_info(number: u32, info: ComicInfo) -> Result<Self, FetchError> {
        if let Some(num) = info.num.filter(|&num| num != number) {
            tracing::warn!("Comic {} info reports number {}", number, num);
        }

        let image_url = match info.img {
            Some(url) if !url.is_empty() => url,
            _ => return Err(FetchError::MissingImageUrl { number }),
        };
        let title = info
            .safe_title
            .unwrap_or_else(|| format!("comic_{}", number));
        let alt_text = info.alt.unwrap_or_default();
        let local_filename = image_filename(number, &title, &image_url);

        Ok(Self {
            number,
            title,
            alt_text,
            image_url,
            local_filename,
        })
    }
}

/// Metadata record written next to each downloaded image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComicMetadata {
    pub comic_num: u32,
    pub title: String,
    pub alt_text: String,
    pub image_url: String,
    pub filename: String,
}

impl From<&ComicRecord> for ComicMetadata {
    fn from(record: &ComicRecord) -> Self {
        Self {
            comic_num: record.number,
            title: record.title.clone(),
            alt_text: record.alt_text.clone(),
            image_url: record.image_url.clone(),
            filename: record.local_filename.clone(),
        }
    }
}
