use tracing::{info, warn};

use crate::app::error::{Operation, PanelError};
use crate::app::{App, AppEvent};
use crate::domain::notification::Notification;
use crate::infra::file_store::StoreError;

impl App {
    /// Deletes `file_name` from the selected location without confirmation.
    pub fn delete_entry(&mut self, file_name: &str) {
        let location = self.state.location();
        let store = self.services.store();
        let event_tx = self.services.event_sender();
        let file_name = file_name.to_string();
        info!(%location, %file_name, "Deleting file");

        self.spawn_task(async move {
            let result = store.delete(location, file_name.clone()).await;

            let _ = event_tx.send(AppEvent::DeleteFinished { file_name, result });
        });
    }

    pub(super) fn finish_delete(&mut self, file_name: &str, result: Result<(), StoreError>) {
        match result {
            Ok(()) => {
                info!(%file_name, "Delete finished");
                self.state.notify(Notification::success(format!(
                    "File {file_name} deleted successfully."
                )));
                self.refresh_inventory();
            }
            Err(error) => {
                warn!(%file_name, %error, "Delete failed");
                self.notify_error(&PanelError::operation(Operation::Delete, &error));
            }
        }
    }
}
