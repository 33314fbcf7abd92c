use std::path::PathBuf;

use tracing::{info, warn};

use crate::app::error::{Operation, PanelError};
use crate::app::{App, AppEvent};
use crate::domain::notification::Notification;
use crate::infra::download::save_stream;
use crate::infra::file_store::StoreError;

impl App {
    /// Downloads `file_name` from the selected location into the download
    /// directory. Never touches the inventory.
    pub fn download_entry(&mut self, file_name: &str) {
        let location = self.state.location();
        let store = self.services.store();
        let event_tx = self.services.event_sender();
        let download_dir = self.services.download_dir().to_path_buf();
        let file_name = file_name.to_string();
        info!(%location, %file_name, "Downloading file");

        self.spawn_task(async move {
            let result = match store.download(location, file_name.clone()).await {
                Ok(stream) => save_stream(&download_dir, &file_name, stream).await,
                Err(error) => Err(error),
            };

            let _ = event_tx.send(AppEvent::DownloadFinished { file_name, result });
        });
    }

    pub(super) fn finish_download(&mut self, file_name: &str, result: Result<PathBuf, StoreError>) {
        match result {
            Ok(saved_path) => {
                info!(%file_name, saved_path = %saved_path.display(), "Download finished");
                self.state.notify(
                    Notification::success(format!("File {file_name} downloaded successfully."))
                        .with_description(saved_path.display().to_string()),
                );
            }
            Err(error) => {
                warn!(%file_name, %error, "Download failed");
                self.notify_error(&PanelError::operation(Operation::Download, &error));
            }
        }
    }
}
