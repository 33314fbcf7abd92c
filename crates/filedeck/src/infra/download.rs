use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;

use crate::domain::file::validate_entry_name;
use crate::infra::file_store::{ByteStream, StoreError};

const TRANSIENT_PREFIX: &str = ".filedeck-";
const TRANSIENT_SUFFIX: &str = ".part";
const MAX_NAME_ATTEMPTS: usize = 1000;

/// Saves `stream` as `download_dir/file_name`.
///
/// Bytes are first written to a transient file inside `download_dir`, which
/// is then persisted under the final name. An existing file is never
/// replaced: the first free name of the form `name (N).ext` is used instead.
/// The transient file is removed on every failure path, including a stream
/// that breaks mid-way.
///
/// # Errors
/// Returns an error when the name is invalid, the directory cannot be
/// prepared, the stream fails, no free name is left, or the file cannot be
/// persisted.
pub async fn save_stream(
    download_dir: &Path,
    file_name: &str,
    mut stream: ByteStream,
) -> Result<PathBuf, StoreError> {
    validate_entry_name(file_name).map_err(StoreError::InvalidName)?;
    tokio::fs::create_dir_all(download_dir).await?;

    let mut transient = tempfile::Builder::new()
        .prefix(TRANSIENT_PREFIX)
        .suffix(TRANSIENT_SUFFIX)
        .tempfile_in(download_dir)?;
    let mut writer = tokio::fs::File::from_std(transient.reopen()?);
    tokio::io::copy(&mut stream, &mut writer).await?;
    writer.flush().await?;
    drop(writer);

    for attempt in 0..MAX_NAME_ATTEMPTS {
        let target = download_dir.join(numbered_name(file_name, attempt));
        match transient.persist_noclobber(&target) {
            Ok(_) => return Ok(target),
            Err(error) if error.error.kind() == ErrorKind::AlreadyExists => {
                transient = error.file;
            }
            Err(error) => return Err(StoreError::Io(error.error)),
        }
    }

    Err(StoreError::AlreadyExists(file_name.to_string()))
}

/// Returns `file_name` for attempt 0, then `stem (N).ext`.
fn numbered_name(file_name: &str, attempt: usize) -> String {
    if attempt == 0 {
        return file_name.to_string();
    }

    match file_name.rsplit_once('.') {
        Some((stem, extension)) if !stem.is_empty() => format!("{stem} ({attempt}).{extension}"),
        _ => format!("{file_name} ({attempt})"),
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::pin::Pin;
    use std::task::{Context, Poll};

    use tempfile::TempDir;
    use tokio::io::{AsyncRead, ReadBuf};

    use super::*;

    /// Yields a few bytes, then fails.
    struct BrokenStream {
        sent: bool,
    }

    impl AsyncRead for BrokenStream {
        fn poll_read(
            mut self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
            buf: &mut ReadBuf<'_>,
        ) -> Poll<io::Result<()>> {
            if self.sent {
                return Poll::Ready(Err(io::Error::other("connection reset")));
            }

            self.sent = true;
            buf.put_slice(b"partial");

            Poll::Ready(Ok(()))
        }
    }

    fn transient_files(dir: &Path) -> Vec<String> {
        std::fs::read_dir(dir)
            .expect("failed to read dir")
            .filter_map(Result::ok)
            .map(|entry| entry.file_name().to_string_lossy().to_string())
            .filter(|name| name.starts_with(TRANSIENT_PREFIX))
            .collect()
    }

    #[tokio::test]
    async fn test_save_stream_writes_target_and_releases_transient_file() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let stream: ByteStream = Box::pin(io::Cursor::new(b"report body".to_vec()));

        // Act
        let saved = save_stream(temp_dir.path(), "report.pdf", stream)
            .await
            .expect("failed to save stream");

        // Assert
        assert_eq!(saved, temp_dir.path().join("report.pdf"));
        assert_eq!(
            std::fs::read(&saved).expect("failed to read saved file"),
            b"report body"
        );
        assert!(transient_files(temp_dir.path()).is_empty());
    }

    #[tokio::test]
    async fn test_save_stream_keeps_existing_file_and_picks_free_name() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let existing = temp_dir.path().join("report.pdf");
        std::fs::write(&existing, b"local copy").expect("failed to write existing file");
        std::fs::write(temp_dir.path().join("report (1).pdf"), b"older copy")
            .expect("failed to write existing file");
        let stream: ByteStream = Box::pin(io::Cursor::new(b"remote".to_vec()));

        // Act
        let saved = save_stream(temp_dir.path(), "report.pdf", stream)
            .await
            .expect("failed to save stream");

        // Assert
        assert_eq!(saved, temp_dir.path().join("report (2).pdf"));
        assert_eq!(std::fs::read(&saved).expect("failed to read saved file"), b"remote");
        assert_eq!(
            std::fs::read(&existing).expect("failed to read existing file"),
            b"local copy"
        );
        assert!(transient_files(temp_dir.path()).is_empty());
    }

    #[test]
    fn test_numbered_name_inserts_counter_before_extension() {
        // Arrange
        let names = ["report.pdf", "archive.tar.gz", "README", ".env"];

        // Act
        let numbered: Vec<String> = names.iter().map(|name| numbered_name(name, 3)).collect();

        // Assert
        assert_eq!(
            numbered,
            ["report (3).pdf", "archive.tar (3).gz", "README (3)", ".env (3)"]
        );
        assert_eq!(numbered_name("report.pdf", 0), "report.pdf");
    }

    #[tokio::test]
    async fn test_save_stream_failure_mid_way_releases_transient_file() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let stream: ByteStream = Box::pin(BrokenStream { sent: false });

        // Act
        let result = save_stream(temp_dir.path(), "report.pdf", stream).await;

        // Assert
        assert!(matches!(result, Err(StoreError::Io(_))));
        assert!(!temp_dir.path().join("report.pdf").exists());
        assert!(transient_files(temp_dir.path()).is_empty());
    }

    #[tokio::test]
    async fn test_save_stream_rejects_path_like_names() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let stream: ByteStream = Box::pin(io::Cursor::new(Vec::new()));

        // Act
        let result = save_stream(temp_dir.path(), "../outside.txt", stream).await;

        // Assert
        assert!(matches!(result, Err(StoreError::InvalidName(_))));
    }
}
