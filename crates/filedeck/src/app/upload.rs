use tracing::{debug, info, warn};

use crate::app::busy::BusyGuard;
use crate::app::error::{Operation, PanelError, ValidationError};
use crate::app::{App, AppEvent};
use crate::domain::file::{UploadForm, UploadPayload};
use crate::domain::notification::Notification;
use crate::infra::file_store::StoreError;

impl App {
    /// Submits the upload form to the selected location.
    ///
    /// The busy flag is raised before validation and stays raised until the
    /// outcome, including its follow-up refresh, has been applied. A submit
    /// while an upload is in flight is ignored.
    pub fn submit_upload(&mut self, form: UploadForm) {
        let Some(busy) = BusyGuard::acquire(&self.upload_busy) else {
            debug!("Upload already in flight; ignoring submit");

            return;
        };

        let payload = match validate_upload_form(form) {
            Ok(payload) => payload,
            Err(error) => {
                self.notify_error(&PanelError::from(error));

                return;
            }
        };

        let location = self.state.location();
        let store = self.services.store();
        let event_tx = self.services.event_sender();
        info!(%location, file_name = %payload.file_name, "Uploading file");

        self.spawn_task(async move {
            let file_name = payload.file_name.clone();
            let result = store.upload(location, payload).await;

            let _ = event_tx.send(AppEvent::UploadFinished {
                busy,
                file_name,
                result,
            });
        });
    }

    pub(super) fn finish_upload(&mut self, file_name: &str, result: Result<(), StoreError>) {
        match result {
            Ok(()) => {
                info!(%file_name, "Upload finished");
                self.state
                    .notify(Notification::success("File uploaded successfully."));
                self.refresh_inventory();
            }
            Err(error) => {
                warn!(%file_name, %error, "Upload failed");
                self.notify_error(&PanelError::operation(Operation::Upload, &error));
            }
        }
    }
}

/// Returns the attached payload, or a validation error when the form has no
/// usable file.
fn validate_upload_form(form: UploadForm) -> Result<UploadPayload, ValidationError> {
    match form.file {
        Some(payload) if !payload.file_name.is_empty() => Ok(payload),
        _ => Err(ValidationError::MissingFile),
    }
}
