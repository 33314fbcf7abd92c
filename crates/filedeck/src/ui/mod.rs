pub mod columns;
pub mod components;
pub mod format;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::TableState;

use crate::app::AppMode;
use crate::app::state::PanelState;
use crate::ui::components::file_table::FileTablePage;
use crate::ui::components::footer_bar::FooterBar;
use crate::ui::components::location_tabs::LocationTabs;
use crate::ui::components::toasts::Toasts;
use crate::ui::components::upload_bar::UploadBar;

/// A trait for UI pages that enforces a standard rendering interface.
pub trait Page {
    fn render(&mut self, f: &mut Frame, area: Rect);
}

/// A trait for UI components that enforces a standard rendering interface.
pub trait Component {
    fn render(&self, f: &mut Frame, area: Rect);
}

pub struct RenderContext<'a> {
    pub mode: &'a AppMode,
    pub state: &'a PanelState,
    pub table_state: &'a mut TableState,
    pub uploading: bool,
}

pub fn render(f: &mut Frame, context: RenderContext<'_>) {
    let RenderContext {
        mode,
        state,
        table_state,
        uploading,
    } = context;

    let area = f.area();

    let outer_chunks = Layout::default()
        .constraints([
            Constraint::Length(1), // Location selector
            Constraint::Length(3), // Upload form
            Constraint::Min(0),    // File table
            Constraint::Length(1), // Footer bar
        ])
        .split(area);

    let tabs_area = outer_chunks[0];
    let upload_area = outer_chunks[1];
    let content_area = outer_chunks[2];
    let footer_area = outer_chunks[3];

    LocationTabs::new(state.location()).render(f, tabs_area);
    UploadBar::new(mode, uploading).render(f, upload_area);
    FileTablePage::new(state, table_state).render(f, content_area);
    FooterBar::new(mode, state.edit().editing_file().is_some()).render(f, footer_area);
    Toasts::new(state.notifications()).render(f, content_area);
}
