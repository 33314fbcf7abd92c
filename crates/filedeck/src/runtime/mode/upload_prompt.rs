use std::io;
use std::path::Path;

use crossterm::event::{KeyCode, KeyEvent};
use tracing::{debug, warn};

use crate::app::error::{PanelError, ValidationError};
use crate::app::{App, AppMode};
use crate::domain::file::{UploadForm, UploadPayload};
use crate::runtime::EventResult;

/// Handles key input while the upload path prompt is open.
pub(crate) async fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    let AppMode::UploadPrompt { input } = &mut app.mode else {
        return EventResult::Continue;
    };

    match key.code {
        KeyCode::Esc => app.mode = AppMode::Browse,
        KeyCode::Backspace => {
            input.pop();
        }
        KeyCode::Char(character) => input.push(character),
        KeyCode::Enter => {
            let path = input.trim().to_string();
            app.mode = AppMode::Browse;
            submit_path(app, &path).await;
        }
        _ => {}
    }

    EventResult::Continue
}

async fn submit_path(app: &mut App, path: &str) {
    if app.is_uploading() {
        debug!(%path, "Upload already in flight; ignoring submit");

        return;
    }
    if path.is_empty() {
        app.submit_upload(UploadForm::default());

        return;
    }

    match read_payload(Path::new(path)).await {
        Ok(payload) => app.submit_upload(UploadForm::with_file(payload)),
        Err(error) => {
            warn!(%path, %error, "Failed to read upload source");
            app.notify_error(&PanelError::from(ValidationError::MissingFile));
        }
    }
}

async fn read_payload(path: &Path) -> io::Result<UploadPayload> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let bytes = tokio::fs::read(path).await?;

    Ok(UploadPayload { file_name, bytes })
}
