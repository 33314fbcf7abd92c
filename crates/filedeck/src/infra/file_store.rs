//! Store boundary consumed by the panel.
//!
//! Every panel operation reaches storage through the [`FileStore`] trait so
//! orchestration code stays independent of the concrete transport.

use std::future::Future;
use std::io;
use std::pin::Pin;

use thiserror::Error;
use tokio::io::AsyncRead;

use crate::domain::file::{FileEntry, Location, UploadPayload};

/// Boxed async result used by [`FileStore`] trait methods.
pub type StoreFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// Byte stream returned by [`FileStore::download`].
pub type ByteStream = Pin<Box<dyn AsyncRead + Send>>;

/// Failure reported by a [`FileStore`] operation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("File {0} was not found")]
    NotFound(String),
    #[error("File {0} already exists")]
    AlreadyExists(String),
    #[error("Invalid file name: {0}")]
    InvalidName(String),
    #[error("File store is unreachable: {0}")]
    Unreachable(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Remote file inventory for the two panel locations.
///
/// Production uses [`LocalFileStore`](crate::infra::local_store::LocalFileStore),
/// while tests inject `MockFileStore` to script results and ordering.
#[cfg_attr(test, mockall::automock)]
pub trait FileStore: Send + Sync {
    /// Lists the files currently stored in `location`.
    ///
    /// # Errors
    /// Returns an error when the store cannot be reached or read.
    fn list(&self, location: Location) -> StoreFuture<Result<Vec<FileEntry>, StoreError>>;

    /// Stores `payload` in `location` under its file name.
    ///
    /// # Errors
    /// Returns an error when the name is invalid or the write fails.
    fn upload(
        &self,
        location: Location,
        payload: UploadPayload,
    ) -> StoreFuture<Result<(), StoreError>>;

    /// Renames `old_name` to `new_name` inside `location`.
    ///
    /// # Errors
    /// Returns an error when the source is missing, the target exists, or
    /// either name is invalid.
    fn rename(
        &self,
        location: Location,
        old_name: String,
        new_name: String,
    ) -> StoreFuture<Result<(), StoreError>>;

    /// Removes `file_name` from `location`.
    ///
    /// # Errors
    /// Returns an error when the file is missing or cannot be removed.
    fn delete(&self, location: Location, file_name: String) -> StoreFuture<Result<(), StoreError>>;

    /// Opens `file_name` in `location` for reading.
    ///
    /// # Errors
    /// Returns an error when the file is missing or cannot be opened.
    fn download(
        &self,
        location: Location,
        file_name: String,
    ) -> StoreFuture<Result<ByteStream, StoreError>>;
}
