use tracing::{debug, info, warn};

use crate::app::error::{Operation, PanelError, ValidationError};
use crate::app::state::RenameSubmission;
use crate::app::{App, AppEvent};
use crate::domain::file::Location;
use crate::domain::notification::Notification;
use crate::infra::file_store::StoreError;

impl App {
    /// Starts editing the name of `file_name`.
    pub fn begin_edit(&mut self, file_name: &str) {
        self.state.edit_mut().begin(file_name);
    }

    /// Replaces the rename draft.
    pub fn set_draft(&mut self, draft: String) {
        self.state.edit_mut().set_draft(draft);
    }

    pub fn push_draft_char(&mut self, character: char) {
        self.state.edit_mut().push_char(character);
    }

    pub fn pop_draft_char(&mut self) {
        self.state.edit_mut().pop_char();
    }

    /// Abandons the current draft.
    pub fn cancel_edit(&mut self) {
        self.state.edit_mut().cancel();
    }

    /// Saves the rename draft.
    ///
    /// An unchanged draft ends editing without contacting the store; an empty
    /// draft is rejected and editing continues.
    pub fn submit_rename(&mut self) {
        let (from, to) = match self.state.edit_mut().submit() {
            RenameSubmission::NotEditing => return,
            RenameSubmission::Unchanged => {
                debug!("Rename draft unchanged; leaving edit mode");

                return;
            }
            RenameSubmission::EmptyDraft => {
                self.notify_error(&PanelError::from(ValidationError::EmptyName));

                return;
            }
            RenameSubmission::Rename { from, to } => (from, to),
        };

        let location = self.state.location();
        let store = self.services.store();
        let event_tx = self.services.event_sender();
        info!(%location, %from, %to, "Renaming file");

        self.spawn_task(async move {
            let result = store.rename(location, from.clone(), to.clone()).await;

            let _ = event_tx.send(AppEvent::RenameFinished {
                from,
                location,
                result,
                to,
            });
        });
    }

    pub(super) fn finish_rename(
        &mut self,
        location: Location,
        from: &str,
        to: &str,
        result: Result<(), StoreError>,
    ) {
        match result {
            Ok(()) => {
                info!(%location, %from, %to, "Rename finished");
                self.state.notify(Notification::success(format!(
                    "File {from} renamed to {to} successfully."
                )));
                self.refresh_inventory();
                // A switch clears the draft, so an edit elsewhere is unrelated.
                if self.state.location() == location {
                    self.state.edit_mut().complete(from);
                }
            }
            Err(error) => {
                warn!(%from, %to, %error, "Rename failed");
                self.notify_error(&PanelError::operation(Operation::Rename, &error));
            }
        }
    }
}
