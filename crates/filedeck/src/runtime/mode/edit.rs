use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::runtime::EventResult;

/// Handles key input while a file name is being edited.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Enter => app.submit_rename(),
        KeyCode::Esc => app.cancel_edit(),
        KeyCode::Backspace => app.pop_draft_char(),
        KeyCode::Char(character) => app.push_draft_char(character),
        _ => {}
    }

    EventResult::Continue
}
