//! Panel controller.
//!
//! [`App`] owns the [`PanelState`], spawns store calls as tasks, and reduces
//! their outcomes when the resulting [`AppEvent`]s are processed. Handlers
//! return immediately; state only changes on the thread that owns `App`.

use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use ratatui::widgets::TableState;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::domain::file::{FileEntry, Location};
use crate::infra::file_store::{FileStore, StoreError};

mod busy;
mod delete;
mod download;
pub mod error;
mod inventory;
mod rename;
mod service;
pub mod state;
mod upload;

use busy::BusyGuard;
use error::PanelError;
use service::AppServices;
use state::{FetchTicket, PanelState};

/// Maximum toasts kept on screen unless configured otherwise.
pub const DEFAULT_NOTIFICATION_LIMIT: usize = 5;

/// Startup options for [`App`].
#[derive(Clone, Debug)]
pub struct AppOptions {
    /// Directory downloads are saved into.
    pub download_dir: PathBuf,
    /// Location selected at startup.
    pub initial_location: Location,
    /// Maximum number of toasts kept at once.
    pub notification_limit: usize,
}

/// Input mode of the terminal UI on top of the panel state.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum AppMode {
    #[default]
    Browse,
    /// The upload prompt is open with the typed local path.
    UploadPrompt { input: String },
}

/// Outcome of a spawned store call, reduced by [`App::apply_app_event`].
#[derive(Debug)]
pub(crate) enum AppEvent {
    /// An inventory listing finished.
    InventoryFetched {
        ticket: FetchTicket,
        result: Result<Vec<FileEntry>, StoreError>,
    },
    /// An upload finished. The busy guard is released once the event is
    /// reduced.
    UploadFinished {
        busy: BusyGuard,
        file_name: String,
        result: Result<(), StoreError>,
    },
    /// A rename inside `location` finished.
    RenameFinished {
        from: String,
        location: Location,
        result: Result<(), StoreError>,
        to: String,
    },
    /// A delete finished.
    DeleteFinished {
        file_name: String,
        result: Result<(), StoreError>,
    },
    /// A download finished; on success carries the saved path.
    DownloadFinished {
        file_name: String,
        result: Result<PathBuf, StoreError>,
    },
}

/// File panel controller.
pub struct App {
    pub mode: AppMode,
    pub table_state: TableState,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    fetch_cancel: CancellationToken,
    services: AppServices,
    state: PanelState,
    tasks: JoinSet<()>,
    upload_busy: Arc<AtomicBool>,
}

impl App {
    /// Creates the panel without fetching; call [`App::start`] to load the
    /// initial inventory.
    pub fn new(store: Arc<dyn FileStore>, options: AppOptions) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        Self {
            mode: AppMode::Browse,
            table_state: TableState::default(),
            event_rx,
            fetch_cancel: CancellationToken::new(),
            services: AppServices::new(store, options.download_dir, event_tx),
            state: PanelState::new(options.initial_location, options.notification_limit),
            tasks: JoinSet::new(),
            upload_busy: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Loads the inventory for the initial location.
    pub fn start(&mut self) {
        self.refresh_inventory();
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    /// Splits the borrows needed to draw one frame.
    pub fn render_parts(&mut self) -> (&AppMode, &PanelState, &mut TableState) {
        (&self.mode, &self.state, &mut self.table_state)
    }

    /// Whether an upload is in flight.
    pub fn is_uploading(&self) -> bool {
        self.upload_busy.load(Ordering::Acquire)
    }

    /// Returns the name of the highlighted table row.
    pub fn selected_file_name(&self) -> Option<String> {
        let index = self.table_state.selected()?;

        self.state
            .inventory()
            .entries()
            .get(index)
            .map(|entry| entry.name.clone())
    }

    pub fn select_next(&mut self) {
        let len = self.state.inventory().entries().len();
        if len == 0 {
            return;
        }

        let next = match self.table_state.selected() {
            Some(index) if index + 1 < len => index + 1,
            _ => 0,
        };
        self.table_state.select(Some(next));
    }

    pub fn select_previous(&mut self) {
        let len = self.state.inventory().entries().len();
        if len == 0 {
            return;
        }

        let previous = match self.table_state.selected() {
            Some(index) if index > 0 => index - 1,
            _ => len - 1,
        };
        self.table_state.select(Some(previous));
    }

    pub fn dismiss_notifications(&mut self) {
        self.state.dismiss_notifications();
    }

    /// Surfaces `error` as a toast.
    pub fn notify_error(&mut self, error: &PanelError) {
        self.state.notify(error.notification());
    }

    /// Applies every queued task outcome without waiting.
    ///
    /// Returns whether at least one event was applied.
    pub fn process_pending_app_events(&mut self) -> bool {
        let mut processed = false;
        while let Ok(event) = self.event_rx.try_recv() {
            self.apply_app_event(event);
            processed = true;
        }

        processed
    }

    /// Waits for the next task outcome.
    pub(crate) async fn next_app_event(&mut self) -> Option<AppEvent> {
        self.event_rx.recv().await
    }

    /// Drops join handles of tasks that already finished.
    pub fn reap_finished_tasks(&mut self) {
        while self.tasks.try_join_next().is_some() {}
    }

    /// Waits until no task is in flight and every outcome, including those
    /// of follow-up refreshes, has been applied.
    pub async fn settle(&mut self) {
        loop {
            while self.tasks.join_next().await.is_some() {}

            if !self.process_pending_app_events() {
                break;
            }
        }
    }

    /// Reduces one task outcome into the panel state.
    pub(crate) fn apply_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::InventoryFetched { ticket, result } => {
                self.finish_fetch(ticket, result);
            }
            AppEvent::UploadFinished {
                busy,
                file_name,
                result,
            } => {
                self.finish_upload(&file_name, result);
                drop(busy);
            }
            AppEvent::RenameFinished {
                from,
                location,
                result,
                to,
            } => {
                self.finish_rename(location, &from, &to, result);
            }
            AppEvent::DeleteFinished { file_name, result } => {
                self.finish_delete(&file_name, result);
            }
            AppEvent::DownloadFinished { file_name, result } => {
                self.finish_download(&file_name, result);
            }
        }
    }

    fn spawn_task<F>(&mut self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.tasks.spawn(task);
    }

    fn clamp_selection(&mut self) {
        let len = self.state.inventory().entries().len();
        let selected = match self.table_state.selected() {
            _ if len == 0 => None,
            Some(index) => Some(index.min(len - 1)),
            None => Some(0),
        };

        self.table_state.select(selected);
    }
}


#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use tempfile::TempDir;

    use super::test_support::{entries, new_test_app};
    use super::*;
    use crate::infra::file_store::MockFileStore;

    #[tokio::test]
    async fn test_start_loads_inventory_for_initial_location() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let mut store = MockFileStore::new();
        store
            .expect_list()
            .with(eq(Location::Images))
            .times(1)
            .returning(|_| entries(&["cat.png", "dog.png"]));
        let mut app = new_test_app(store, temp_dir.path());

        // Act
        app.start();
        assert!(app.state().is_loading());
        app.settle().await;

        // Assert
        assert!(!app.state().is_loading());
        assert_eq!(app.state().inventory().entries().len(), 2);
        assert_eq!(app.selected_file_name().as_deref(), Some("cat.png"));
    }

    #[tokio::test]
    async fn test_selection_wraps_around_inventory() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let mut store = MockFileStore::new();
        store
            .expect_list()
            .returning(|_| entries(&["a.txt", "b.txt"]));
        let mut app = new_test_app(store, temp_dir.path());
        app.start();
        app.settle().await;

        // Act
        app.select_previous();

        // Assert
        assert_eq!(app.selected_file_name().as_deref(), Some("b.txt"));
        app.select_next();
        assert_eq!(app.selected_file_name().as_deref(), Some("a.txt"));
    }

    #[tokio::test]
    async fn test_dismiss_notifications_clears_toasts() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let mut app = new_test_app(MockFileStore::new(), temp_dir.path());
        app.notify_error(&PanelError::Connection("offline".to_string()));

        // Act
        app.dismiss_notifications();

        // Assert
        assert!(app.state().notifications().is_empty());
    }
}
