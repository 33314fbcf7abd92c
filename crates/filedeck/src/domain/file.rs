use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Logical namespace of the file store that every panel operation targets.
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    #[default]
    Images,
    Docs,
}

impl Location {
    /// All selectable locations in selector order.
    pub const ALL: [Location; 2] = [Location::Images, Location::Docs];

    /// Returns the stable identifier used for store paths and config values.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Images => "images",
            Self::Docs => "docs",
        }
    }

    /// Returns the human-readable selector label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Images => "Images",
            Self::Docs => "Documents",
        }
    }

    /// Returns the other location.
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Images => Self::Docs,
            Self::Docs => Self::Images,
        }
    }

    /// Returns the selector index of this location.
    pub fn index(self) -> usize {
        match self {
            Self::Images => 0,
            Self::Docs => 1,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable snapshot of one stored file as reported by the store listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileEntry {
    /// File name, unique within its location.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// Last modification timestamp.
    pub modified_at: OffsetDateTime,
}

/// File contents attached to an upload form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadPayload {
    /// Name the file is stored under.
    pub file_name: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

/// Upload form as submitted by the user; the file slot may be empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadForm {
    pub file: Option<UploadPayload>,
}

impl UploadForm {
    /// Creates a form with `payload` attached.
    pub fn with_file(payload: UploadPayload) -> Self {
        Self {
            file: Some(payload),
        }
    }
}

/// Checks that `name` is a flat file name usable inside one location.
///
/// # Errors
/// Returns a description of the problem when the name is empty, is a
/// relative path component, or contains a path separator or NUL byte.
pub fn validate_entry_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("file name is empty".to_string());
    }
    if name == "." || name == ".." {
        return Err(format!("`{name}` is not a file name"));
    }
    if name.contains(['/', '\\', '\0']) {
        return Err(format!("`{name}` must not contain path separators"));
    }

    Ok(())
}
