use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::AppMode;
use crate::ui::Component;

const INPUT_CURSOR: &str = "▏";

/// Upload form: shows the path prompt, the busy state, or a hint.
pub struct UploadBar<'a> {
    mode: &'a AppMode,
    uploading: bool,
}

impl<'a> UploadBar<'a> {
    pub fn new(mode: &'a AppMode, uploading: bool) -> Self {
        Self { mode, uploading }
    }

    fn text(&self) -> (String, Style) {
        if self.uploading {
            return ("Uploading…".to_string(), Style::default().fg(Color::Yellow));
        }

        match self.mode {
            AppMode::UploadPrompt { input } => (
                format!("Local file: {input}{INPUT_CURSOR}"),
                Style::default().fg(Color::White),
            ),
            AppMode::Browse => (
                "Press u to attach a file".to_string(),
                Style::default().fg(Color::DarkGray),
            ),
        }
    }
}

impl Component for UploadBar<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let (text, style) = self.text();
        let upload = Paragraph::new(text)
            .style(style)
            .block(Block::default().borders(Borders::ALL).title("Upload"));

        f.render_widget(upload, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_busy_state_wins_over_prompt() {
        // Arrange
        let mode = AppMode::UploadPrompt {
            input: "/tmp/cat.png".to_string(),
        };
        let bar = UploadBar::new(&mode, true);

        // Act
        let (text, _) = bar.text();

        // Assert
        assert_eq!(text, "Uploading…");
    }

    #[test]
    fn test_prompt_shows_typed_path() {
        // Arrange
        let mode = AppMode::UploadPrompt {
            input: "/tmp/cat.png".to_string(),
        };
        let bar = UploadBar::new(&mode, false);

        // Act
        let (text, _) = bar.text();

        // Assert
        assert_eq!(text, format!("Local file: /tmp/cat.png{INPUT_CURSOR}"));
    }
}
