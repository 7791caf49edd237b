//! Comic data model
//!
//! This module holds the API payload types, the resolved [`ComicRecord`] and
//! the rules that turn a record into local filenames.

pub mod filename;
mod record;

pub use filename::{image_extension, image_filename, metadata_filename, sanitize_title};
pub use record::{ComicInfo, ComicMetadata, ComicRecord, LatestComic};
