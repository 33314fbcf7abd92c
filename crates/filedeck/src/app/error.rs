use std::fmt;

use thiserror::Error;

use crate::domain::notification::Notification;
use crate::infra::file_store::StoreError;

const CONNECTION_ERROR_TITLE: &str = "Can't connect to file store";
const CONNECTION_ERROR_HINT: &str = "Check logs";
const UPLOAD_ERROR_TITLE: &str = "Error uploading file";

/// Remote mutation or transfer a panel action performs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Operation {
    Upload,
    Rename,
    Delete,
    Download,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Self::Upload => "upload",
            Self::Rename => "rename",
            Self::Delete => "delete",
            Self::Download => "download",
        };

        f.write_str(verb)
    }
}

/// Local pre-flight check that failed before any store call.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum ValidationError {
    #[error("Please attach a file")]
    MissingFile,
    #[error("Please enter a new filename.")]
    EmptyName,
}

/// Every failure a panel action can end with.
///
/// Errors never escape the panel; each one is converted into a toast through
/// [`PanelError::notification`].
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum PanelError {
    /// The inventory listing could not be fetched.
    #[error("Can't connect to file store: {0}")]
    Connection(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The store rejected an operation after it was sent.
    #[error("Failed to {operation} file: {message}")]
    Operation { operation: Operation, message: String },
}

impl PanelError {
    /// Wraps a store failure for `operation`.
    pub fn operation(operation: Operation, error: &StoreError) -> Self {
        Self::Operation {
            operation,
            message: error.to_string(),
        }
    }

    /// Builds the toast shown for this error.
    pub fn notification(&self) -> Notification {
        match self {
            Self::Connection(_) => Notification::error(CONNECTION_ERROR_TITLE, CONNECTION_ERROR_HINT),
            Self::Validation(ValidationError::MissingFile) => {
                Notification::info(UPLOAD_ERROR_TITLE, ValidationError::MissingFile.to_string())
            }
            Self::Validation(ValidationError::EmptyName) => {
                Notification::error("Error", ValidationError::EmptyName.to_string())
            }
            Self::Operation {
                operation: Operation::Upload,
                message,
            } => Notification::error(UPLOAD_ERROR_TITLE, message.as_str()),
            Self::Operation { operation, message } => {
                Notification::error(format!("Failed to {operation} file"), message.as_str())
            }
        }
    }
}
