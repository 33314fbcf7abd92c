//! Shared app dependency container for panel workflows.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::app::AppEvent;
use crate::infra::file_store::FileStore;

/// Dependencies shared by the panel and the tasks it spawns.
pub(crate) struct AppServices {
    download_dir: PathBuf,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    store: Arc<dyn FileStore>,
}

impl AppServices {
    pub(crate) fn new(
        store: Arc<dyn FileStore>,
        download_dir: PathBuf,
        event_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        Self {
            download_dir,
            event_tx,
            store,
        }
    }

    /// Returns the directory downloads are saved into.
    pub(crate) fn download_dir(&self) -> &Path {
        self.download_dir.as_path()
    }

    /// Returns a clone of the app event sender.
    pub(crate) fn event_sender(&self) -> mpsc::UnboundedSender<AppEvent> {
        self.event_tx.clone()
    }

    /// Returns the shared store client.
    pub(crate) fn store(&self) -> Arc<dyn FileStore> {
        Arc::clone(&self.store)
    }
}
