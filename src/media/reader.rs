//! Filesystem media reader.

use std::path::Path;

use async_trait::async_trait;
use log::{debug, warn};
use tokio::fs;

use super::data_url::{encode_data_url, mime_for_path};
use super::{Attachment, MAX_ATTACHMENT_BYTES, MediaError};

/// Async file-to-preview interface. Lets the TUI run against the real
/// filesystem while tests substitute scripted readers.
#[async_trait]
pub trait MediaReader: Send + Sync {
    async fn read(&self, path: &Path) -> Result<Attachment, MediaError>;
}

/// Reads attachments from the local filesystem via tokio.
pub struct FsMediaReader;

#[async_trait]
impl MediaReader for FsMediaReader {
    async fn read(&self, path: &Path) -> Result<Attachment, MediaError> {
        // Size gate comes from metadata; an oversize file is never opened
        // for content.
        let meta = fs::metadata(path)
            .await
            .map_err(|e| MediaError::Io(e.to_string()))?;
        if meta.len() > MAX_ATTACHMENT_BYTES {
            warn!(
                "Attachment rejected: {} is {} bytes",
                path.display(),
                meta.len()
            );
            return Err(MediaError::TooLarge { size: meta.len() });
        }

        let bytes = fs::read(path)
            .await
            .map_err(|e| MediaError::Io(e.to_string()))?;
        let mime = mime_for_path(path);
        debug!(
            "Encoded {} ({} bytes, {})",
            path.display(),
            bytes.len(),
            mime
        );

        Ok(Attachment {
            file_name: path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("attachment")
                .to_string(),
            mime: mime.to_string(),
            bytes: bytes.len() as u64,
            data_url: encode_data_url(mime, &bytes),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file_with(name: &str, contents: &[u8]) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents).unwrap();
        (dir, path)
    }

    #[tokio::test]
    async fn test_read_encodes_data_url_with_mime() {
        let (_dir, path) = temp_file_with("photo.png", b"fakepng");
        let attachment = FsMediaReader.read(&path).await.unwrap();

        assert_eq!(attachment.file_name, "photo.png");
        assert_eq!(attachment.mime, "image/png");
        assert_eq!(attachment.bytes, 7);
        assert!(attachment.data_url.starts_with("data:image/png;base64,"));
    }

    #[tokio::test]
    async fn test_read_accepts_file_at_exact_limit() {
        let (_dir, path) = temp_file_with("limit.bin", &vec![0u8; MAX_ATTACHMENT_BYTES as usize]);
        let attachment = FsMediaReader.read(&path).await.unwrap();
        assert_eq!(attachment.bytes, MAX_ATTACHMENT_BYTES);
    }

    #[tokio::test]
    async fn test_read_rejects_file_one_byte_over_limit() {
        let (_dir, path) =
            temp_file_with("big.bin", &vec![0u8; MAX_ATTACHMENT_BYTES as usize + 1]);
        let result = FsMediaReader.read(&path).await;
        assert!(
            matches!(result, Err(MediaError::TooLarge { size }) if size == MAX_ATTACHMENT_BYTES + 1)
        );
    }

    #[tokio::test]
    async fn test_read_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = FsMediaReader.read(&dir.path().join("absent.png")).await;
        assert!(matches!(result, Err(MediaError::Io(_))));
    }
}
