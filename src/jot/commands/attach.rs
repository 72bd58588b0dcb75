use crate::backend::NotesBackend;
use crate::error::{JotError, Result};
use chrono::Utc;
use std::path::Path;

/// Upload a local file as an attachment, returning the storage key.
///
/// The size check happens before any request is issued. Keys are prefixed
/// with the upload time in epoch milliseconds so repeated uploads of the
/// same filename stay distinct.
pub async fn run<B: NotesBackend>(backend: &B, path: &Path, max_size: u64) -> Result<String> {
    let metadata = std::fs::metadata(path)?;
    if metadata.len() > max_size {
        return Err(JotError::AttachmentTooLarge {
            size: metadata.len(),
            limit: max_size,
        });
    }

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| JotError::Api(format!("Invalid attachment path: {}", path.display())))?;
    let filename = format!("{}-{}", Utc::now().timestamp_millis(), name);

    let bytes = std::fs::read(path)?;
    backend.upload_attachment(&filename, bytes).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::memory::InMemoryBackend;
    use std::io::Write;

    #[tokio::test]
    async fn uploads_file_under_the_limit() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"image bytes").unwrap();

        let backend = InMemoryBackend::new();
        let key = run(&backend, file.path(), 5_000_000).await.unwrap();
        assert!(!key.is_empty());
    }

    #[tokio::test]
    async fn rejects_oversized_file_before_any_request() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0u8; 64]).unwrap();

        let backend = InMemoryBackend::new();
        let err = run(&backend, file.path(), 16).await.unwrap_err();
        assert!(matches!(err, JotError::AttachmentTooLarge { size: 64, limit: 16 }));
    }

    #[tokio::test]
    async fn key_is_timestamp_prefixed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"x").unwrap();

        let backend = InMemoryBackend::new();
        let key = run(&backend, file.path(), 1024).await.unwrap();
        let (prefix, _) = key.split_once('-').unwrap();
        assert!(prefix.chars().all(|c| c.is_ascii_digit()));
    }
}
