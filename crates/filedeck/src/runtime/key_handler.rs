use crossterm::event::KeyEvent;

use crate::app::{App, AppMode};
use crate::runtime::{EventResult, mode};

pub(crate) async fn handle_key_event(app: &mut App, key: KeyEvent) -> EventResult {
    match &app.mode {
        AppMode::UploadPrompt { .. } => mode::upload_prompt::handle(app, key).await,
        AppMode::Browse if app.state().edit().editing_file().is_some() => {
            mode::edit::handle(app, key)
        }
        AppMode::Browse => mode::browse::handle(app, key),
    }
}
