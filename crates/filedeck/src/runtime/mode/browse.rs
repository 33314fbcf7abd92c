use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, AppMode};
use crate::runtime::EventResult;

/// Handles key input while browsing the inventory.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char('q') => return EventResult::Quit,
        KeyCode::Tab | KeyCode::BackTab => app.toggle_location(),
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),
        KeyCode::Char('u') => {
            app.mode = AppMode::UploadPrompt {
                input: String::new(),
            };
        }
        KeyCode::Char('d') => {
            if let Some(file_name) = app.selected_file_name() {
                app.download_entry(&file_name);
            }
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            if let Some(file_name) = app.selected_file_name() {
                app.begin_edit(&file_name);
            }
        }
        KeyCode::Char('x') | KeyCode::Delete => {
            if let Some(file_name) = app.selected_file_name() {
                app.delete_entry(&file_name);
            }
        }
        KeyCode::Char('r') => app.refresh_inventory(),
        KeyCode::Char('c') => app.dismiss_notifications(),
        _ => {}
    }

    EventResult::Continue
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use mockall::predicate::eq;
    use tempfile::TempDir;

    use super::*;
    use crate::app::state::EditState;
    use crate::app::test_support::{entries, new_test_app};
    use crate::domain::file::Location;
    use crate::infra::file_store::MockFileStore;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[tokio::test]
    async fn test_q_quits() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let mut app = new_test_app(MockFileStore::new(), temp_dir.path());

        // Act
        let result = handle(&mut app, press(KeyCode::Char('q')));

        // Assert
        assert!(matches!(result, EventResult::Quit));
    }

    #[tokio::test]
    async fn test_tab_switches_location() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let mut store = MockFileStore::new();
        store
            .expect_list()
            .with(eq(Location::Docs))
            .times(1)
            .returning(|_| entries(&["cv.pdf"]));
        let mut app = new_test_app(store, temp_dir.path());

        // Act
        let result = handle(&mut app, press(KeyCode::Tab));
        app.settle().await;

        // Assert
        assert!(matches!(result, EventResult::Continue));
        assert_eq!(app.state().location(), Location::Docs);
        assert!(app.state().inventory().contains("cv.pdf"));
    }

    #[tokio::test]
    async fn test_u_opens_upload_prompt() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let mut app = new_test_app(MockFileStore::new(), temp_dir.path());

        // Act
        handle(&mut app, press(KeyCode::Char('u')));

        // Assert
        assert_eq!(
            app.mode,
            AppMode::UploadPrompt {
                input: String::new()
            }
        );
    }

    #[tokio::test]
    async fn test_e_starts_editing_selected_file() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let mut store = MockFileStore::new();
        store
            .expect_list()
            .returning(|_| entries(&["a.txt", "b.txt"]));
        let mut app = new_test_app(store, temp_dir.path());
        app.start();
        app.settle().await;
        handle(&mut app, press(KeyCode::Down));

        // Act
        handle(&mut app, press(KeyCode::Char('e')));

        // Assert
        assert_eq!(
            app.state().edit(),
            &EditState::Editing {
                file_name: "b.txt".to_string(),
                draft: "b.txt".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_delete_without_selection_does_nothing() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let mut store = MockFileStore::new();
        store.expect_delete().times(0);
        let mut app = new_test_app(store, temp_dir.path());

        // Act
        handle(&mut app, press(KeyCode::Delete));
        app.settle().await;

        // Assert
        assert!(app.state().notifications().is_empty());
    }
}
