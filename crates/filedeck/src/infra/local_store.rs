use std::io;
use std::path::{Path, PathBuf};

use time::OffsetDateTime;

use crate::domain::file::{FileEntry, Location, UploadPayload, validate_entry_name};
use crate::infra::file_store::{ByteStream, FileStore, StoreError, StoreFuture};

/// [`FileStore`] backed by a directory with one sub-directory per location.
#[derive(Clone, Debug)]
pub struct LocalFileStore {
    root: PathBuf,
}

impl LocalFileStore {
    /// Opens the store rooted at `root`, creating location directories that
    /// do not exist yet.
    ///
    /// # Errors
    /// Returns an error when a location directory cannot be created.
    pub fn open(root: &Path) -> io::Result<Self> {
        for location in Location::ALL {
            std::fs::create_dir_all(root.join(location.as_str()))?;
        }

        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    fn location_dir(&self, location: Location) -> PathBuf {
        self.root.join(location.as_str())
    }

    fn entry_path(&self, location: Location, file_name: &str) -> Result<PathBuf, StoreError> {
        validate_entry_name(file_name).map_err(StoreError::InvalidName)?;

        Ok(self.location_dir(location).join(file_name))
    }
}

impl FileStore for LocalFileStore {
    fn list(&self, location: Location) -> StoreFuture<Result<Vec<FileEntry>, StoreError>> {
        let dir = self.location_dir(location);

        Box::pin(async move { list_entries(dir).await })
    }

    fn upload(
        &self,
        location: Location,
        payload: UploadPayload,
    ) -> StoreFuture<Result<(), StoreError>> {
        let path = self.entry_path(location, &payload.file_name);

        Box::pin(async move {
            let path = path?;
            tokio::fs::write(&path, payload.bytes).await?;

            Ok(())
        })
    }

    fn rename(
        &self,
        location: Location,
        old_name: String,
        new_name: String,
    ) -> StoreFuture<Result<(), StoreError>> {
        let source = self.entry_path(location, &old_name);
        let target = self.entry_path(location, &new_name);

        Box::pin(async move {
            let (source, target) = (source?, target?);
            if !tokio::fs::try_exists(&source).await? {
                return Err(StoreError::NotFound(old_name));
            }
            if tokio::fs::try_exists(&target).await? {
                return Err(StoreError::AlreadyExists(new_name));
            }

            tokio::fs::rename(&source, &target)
                .await
                .map_err(|error| map_io_error(error, &old_name))
        })
    }

    fn delete(&self, location: Location, file_name: String) -> StoreFuture<Result<(), StoreError>> {
        let path = self.entry_path(location, &file_name);

        Box::pin(async move {
            tokio::fs::remove_file(path?)
                .await
                .map_err(|error| map_io_error(error, &file_name))
        })
    }

    fn download(
        &self,
        location: Location,
        file_name: String,
    ) -> StoreFuture<Result<ByteStream, StoreError>> {
        let path = self.entry_path(location, &file_name);

        Box::pin(async move {
            let path = path?;
            let metadata = tokio::fs::metadata(&path)
                .await
                .map_err(|error| map_io_error(error, &file_name))?;
            if !metadata.is_file() {
                return Err(StoreError::NotFound(file_name));
            }

            let file = tokio::fs::File::open(&path)
                .await
                .map_err(|error| map_io_error(error, &file_name))?;
            let stream: ByteStream = Box::pin(file);

            Ok(stream)
        })
    }
}

/// Reads regular files in `dir`, sorted by name. Sub-directories are skipped.
async fn list_entries(dir: PathBuf) -> Result<Vec<FileEntry>, StoreError> {
    let mut read_dir = tokio::fs::read_dir(&dir).await.map_err(|error| {
        StoreError::Unreachable(format!("cannot read {}: {error}", dir.display()))
    })?;

    let mut entries = Vec::new();
    while let Some(dir_entry) = read_dir.next_entry().await? {
        let metadata = dir_entry.metadata().await?;
        if !metadata.is_file() {
            continue;
        }

        let modified_at = metadata
            .modified()
            .map_or(OffsetDateTime::UNIX_EPOCH, OffsetDateTime::from);
        entries.push(FileEntry {
            name: dir_entry.file_name().to_string_lossy().to_string(),
            size: metadata.len(),
            modified_at,
        });
    }
    entries.sort_by(|first, second| first.name.cmp(&second.name));

    Ok(entries)
}

fn map_io_error(error: io::Error, file_name: &str) -> StoreError {
    if error.kind() == io::ErrorKind::NotFound {
        return StoreError::NotFound(file_name.to_string());
    }

    StoreError::Io(error)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;
    use tokio::io::AsyncReadExt;

    use super::*;

    fn open_store() -> (LocalFileStore, TempDir) {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let store = LocalFileStore::open(temp_dir.path()).expect("failed to open store");

        (store, temp_dir)
    }

    fn payload(file_name: &str, contents: &str) -> UploadPayload {
        UploadPayload {
            file_name: file_name.to_string(),
            bytes: contents.as_bytes().to_vec(),
        }
    }

    #[test]
    fn test_open_creates_location_directories() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");

        // Act
        let store = LocalFileStore::open(temp_dir.path());

        // Assert
        assert!(store.is_ok());
        assert!(temp_dir.path().join("images").is_dir());
        assert!(temp_dir.path().join("docs").is_dir());
    }

    #[tokio::test]
    async fn test_list_returns_sorted_files_and_skips_directories() {
        // Arrange
        let (store, temp_dir) = open_store();
        let docs = temp_dir.path().join("docs");
        fs::write(docs.join("b.txt"), "bb").expect("failed to write file");
        fs::write(docs.join("a.txt"), "a").expect("failed to write file");
        fs::create_dir(docs.join("nested")).expect("failed to create dir");

        // Act
        let entries = store.list(Location::Docs).await.expect("failed to list");

        // Assert
        let names: Vec<&str> = entries.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(names, ["a.txt", "b.txt"]);
        assert_eq!(entries[1].size, 2);
    }

    #[tokio::test]
    async fn test_list_keeps_locations_separate() {
        // Arrange
        let (store, _temp_dir) = open_store();
        store
            .upload(Location::Images, payload("cat.png", "png"))
            .await
            .expect("failed to upload");

        // Act
        let docs = store.list(Location::Docs).await.expect("failed to list");

        // Assert
        assert!(docs.is_empty());
    }

    #[tokio::test]
    async fn test_list_reports_unreachable_root() {
        // Arrange
        let (store, temp_dir) = open_store();
        fs::remove_dir_all(temp_dir.path().join("images")).expect("failed to remove dir");

        // Act
        let result = store.list(Location::Images).await;

        // Assert
        assert!(matches!(result, Err(StoreError::Unreachable(_))));
    }

    #[tokio::test]
    async fn test_upload_rejects_path_like_names() {
        // Arrange
        let (store, _temp_dir) = open_store();

        // Act
        let result = store
            .upload(Location::Docs, payload("../escape.txt", "x"))
            .await;

        // Assert
        assert!(matches!(result, Err(StoreError::InvalidName(_))));
    }

    #[tokio::test]
    async fn test_rename_moves_file_within_location() {
        // Arrange
        let (store, temp_dir) = open_store();
        store
            .upload(Location::Docs, payload("a.txt", "hello"))
            .await
            .expect("failed to upload");

        // Act
        let result = store
            .rename(Location::Docs, "a.txt".to_string(), "b.txt".to_string())
            .await;

        // Assert
        assert!(result.is_ok());
        assert!(!temp_dir.path().join("docs/a.txt").exists());
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("docs/b.txt")).expect("failed to read"),
            "hello"
        );
    }

    #[tokio::test]
    async fn test_rename_refuses_to_overwrite_existing_target() {
        // Arrange
        let (store, _temp_dir) = open_store();
        for name in ["a.txt", "b.txt"] {
            store
                .upload(Location::Docs, payload(name, name))
                .await
                .expect("failed to upload");
        }

        // Act
        let result = store
            .rename(Location::Docs, "a.txt".to_string(), "b.txt".to_string())
            .await;

        // Assert
        assert!(matches!(result, Err(StoreError::AlreadyExists(name)) if name == "b.txt"));
    }

    #[tokio::test]
    async fn test_rename_missing_source_reports_not_found() {
        // Arrange
        let (store, _temp_dir) = open_store();

        // Act
        let result = store
            .rename(Location::Docs, "ghost.txt".to_string(), "b.txt".to_string())
            .await;

        // Assert
        assert!(matches!(result, Err(StoreError::NotFound(name)) if name == "ghost.txt"));
    }

    #[tokio::test]
    async fn test_delete_removes_file() {
        // Arrange
        let (store, _temp_dir) = open_store();
        store
            .upload(Location::Images, payload("cat.png", "png"))
            .await
            .expect("failed to upload");

        // Act
        let result = store.delete(Location::Images, "cat.png".to_string()).await;

        // Assert
        assert!(result.is_ok());
        let entries = store.list(Location::Images).await.expect("failed to list");
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_file_reports_not_found() {
        // Arrange
        let (store, _temp_dir) = open_store();

        // Act
        let result = store.delete(Location::Images, "ghost.png".to_string()).await;

        // Assert
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_download_streams_file_contents() {
        // Arrange
        let (store, _temp_dir) = open_store();
        store
            .upload(Location::Docs, payload("notes.md", "# notes"))
            .await
            .expect("failed to upload");

        // Act
        let mut stream = store
            .download(Location::Docs, "notes.md".to_string())
            .await
            .expect("failed to download");
        let mut contents = String::new();
        stream
            .read_to_string(&mut contents)
            .await
            .expect("failed to read stream");

        // Assert
        assert_eq!(contents, "# notes");
    }

    #[tokio::test]
    async fn test_download_missing_file_reports_not_found() {
        // Arrange
        let (store, _temp_dir) = open_store();

        // Act
        let result = store.download(Location::Docs, "ghost.md".to_string()).await;

        // Assert
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }
}
