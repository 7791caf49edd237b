//! Local filename derivation
//!
//! Image files are named `NNNN_<sanitized title><ext>` and metadata files
//! `NNNN_metadata.json`, where `NNNN` is the comic number zero-padded to four
//! digits. The number prefix keeps filenames of distinct comics apart even
//! when their titles sanitize to the same string.

use url::Url;

/// Extension used when the image URL path has none
pub const DEFAULT_EXTENSION: &str = ".png";

/// Replaces spaces and slashes in a title with underscores
pub fn sanitize_title(title: &str) -> String {
    title.replace([' ', '/'], "_")
}

/// Returns the extension (with leading dot) of the image URL's path
///
/// Query strings and fragments are ignored. Leading dots of the final path
/// segment do not start an extension, so `/.hidden` has none. Falls back to
/// [`DEFAULT_EXTENSION`].
pub fn image_extension(image_url: &str) -> String {
    let path = match Url::parse(image_url) {
        Ok(url) => url.path().to_string(),
        Err(_) => image_url
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .to_string(),
    };

    let segment = path.rsplit('/').next().unwrap_or_default();
    let stem = segment.trim_start_matches('.');

    match stem.rfind('.') {
        Some(idx) => stem[idx..].to_string(),
        None => DEFAULT_EXTENSION.to_string(),
    }
}

/// Derives the image filename for a comic
pub fn image_filename(number: u32, title: &str, image_url: &str) -> String {
    format!(
        "{:04}_{}{}",
        number,
        sanitize_title(title),
        image_extension(image_url)
    )
}

/// Derives the metadata filename for a comic
pub fn metadata_filename(number: u32) -> String {
    format!("{:04}_metadata.json", number)
}
