use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use crate::app::AppMode;
use crate::ui::Component;

const BROWSE_HELP: &str = "Tab location · j/k select · u upload · d download · e rename · x delete · r refresh · c clear · q quit";
const EDIT_HELP: &str = "Type new name · Enter save · Esc cancel";
const UPLOAD_HELP: &str = "Type local file path · Enter upload · Esc cancel";

/// Bottom bar listing the keys available in the current mode.
pub struct FooterBar<'a> {
    editing: bool,
    mode: &'a AppMode,
}

impl<'a> FooterBar<'a> {
    pub fn new(mode: &'a AppMode, editing: bool) -> Self {
        Self { editing, mode }
    }

    fn help_text(&self) -> &'static str {
        match self.mode {
            AppMode::UploadPrompt { .. } => UPLOAD_HELP,
            AppMode::Browse if self.editing => EDIT_HELP,
            AppMode::Browse => BROWSE_HELP,
        }
    }
}

impl Component for FooterBar<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let footer = Paragraph::new(format!(" {}", self.help_text()))
            .style(Style::default().bg(Color::DarkGray).fg(Color::Gray));

        f.render_widget(footer, area);
    }
}
