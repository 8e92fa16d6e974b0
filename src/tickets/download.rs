//! Saving documents
//!
//! Writes a downloaded blob into the downloads directory.

use log::info;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::error::StorageError;
use crate::storage::sanitize_filename;
use crate::transport::Blob;

/// Used when neither the caller nor the server names the file
pub const DEFAULT_DOCUMENT_NAME: &str = "tickets.txt";

/// Save `blob` as `dir/filename`, creating `dir` if needed.
///
/// Without an explicit `filename` the server-suggested name is used, then
/// `DEFAULT_DOCUMENT_NAME`.
pub async fn save_blob(
    blob: &Blob,
    dir: &Path,
    filename: Option<&str>,
) -> Result<PathBuf, StorageError> {
    let name = filename
        .or(blob.filename.as_deref())
        .unwrap_or(DEFAULT_DOCUMENT_NAME);
    let name = sanitize_filename(name)?;

    fs::create_dir_all(dir).await?;
    let path = dir.join(name);
    fs::write(&path, &blob.data).await?;

    info!("Saved {} bytes to {}", blob.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_dir(prefix: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "{}-{}",
            prefix,
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("clock")
                .as_nanos()
        ))
    }

    #[tokio::test]
    async fn test_name_resolution_order() {
        let dir = temp_dir("laritmo-download");
        let blob = Blob::new("Ticket 1").with_filename("tickets_rust.txt");

        let explicit = save_blob(&blob, &dir, Some("mine.txt")).await.unwrap();
        assert_eq!(explicit, dir.join("mine.txt"));

        let suggested = save_blob(&blob, &dir, None).await.unwrap();
        assert_eq!(suggested, dir.join("tickets_rust.txt"));
        assert_eq!(std::fs::read_to_string(&suggested).unwrap(), "Ticket 1");

        let fallback = save_blob(&Blob::new("x"), &dir, None).await.unwrap();
        assert_eq!(fallback, dir.join(DEFAULT_DOCUMENT_NAME));

        std::fs::remove_dir_all(dir).ok();
    }

    #[tokio::test]
    async fn test_rejects_escaping_names() {
        let dir = temp_dir("laritmo-download-bad");
        let result = save_blob(&Blob::new("x"), &dir, Some("../escape.txt")).await;
        assert!(matches!(result, Err(StorageError::InvalidFilename(_))));
    }
}
