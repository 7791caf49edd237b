//! Writing comic files to the output directory
//!
//! Images are streamed into a `.part` sibling and renamed into place once the
//! body is complete, so an image path either holds a full image or nothing.

use crate::comic::{metadata_filename, ComicMetadata, ComicRecord};
use crate::crawler::ImageStream;
use crate::CrawlerError;
use std::path::{Path, PathBuf};
use tokio::fs::{self, File};

/// Returns the temporary path an image is streamed into before the rename
pub fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".part");
    PathBuf::from(name)
}

/// Streams a downloaded image to `path`
///
/// On any error the partial file is removed and nothing is left at `path`.
pub async fn write_image(stream: &mut ImageStream, path: &Path) -> Result<u64, CrawlerError> {
    let tmp_path = partial_path(path);

    let result: Result<u64, CrawlerError> = async {
        let mut file = File::create(&tmp_path).await?;
        let written = stream.copy_to(&mut file).await?;
        file.sync_all().await?;
        drop(file);
        fs::rename(&tmp_path, path).await?;
        Ok(written)
    }
    .await;

    if result.is_err() {
        if let Err(e) = fs::remove_file(&tmp_path).await {
            tracing::debug!("Could not remove {}: {}", tmp_path.display(), e);
        }
    }

    result
}

/// Renders the metadata record as indented JSON
///
/// Non-ASCII text is kept as-is rather than escaped.
pub fn render_metadata(record: &ComicRecord) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&ComicMetadata::from(record))
}

/// Writes the metadata record for a comic into `output_dir`
///
/// Returns the path of the written file.
pub async fn write_metadata(
    output_dir: &Path,
    record: &ComicRecord,
) -> Result<PathBuf, CrawlerError> {
    let path = output_dir.join(metadata_filename(record.number));
    let tmp_path = partial_path(&path);
    let json = render_metadata(record)?;
    fs::write(&tmp_path, json).await?;
    fs::rename(&tmp_path, &path).await?;
    Ok(path)
}
