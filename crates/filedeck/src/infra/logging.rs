use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::str::FromStr;
use std::sync::Mutex;

use tracing_subscriber::filter::LevelFilter;

/// Installs the global `tracing` subscriber writing plain-text lines to
/// `log_path`.
///
/// The terminal UI owns stdout, so logs always go to a file.
///
/// # Errors
/// Returns an error when `level` is not a valid level filter, the log file
/// cannot be opened, or a subscriber is already installed.
pub fn init(log_path: &Path, level: &str) -> io::Result<()> {
    let level = LevelFilter::from_str(level).map_err(io::Error::other)?;
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new().create(true).append(true).open(log_path)?;

    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(level)
        .with_target(true)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(io::Error::other)
}
