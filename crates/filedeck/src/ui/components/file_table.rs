use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Table, TableState};

use crate::app::state::PanelState;
use crate::ui::Page;
use crate::ui::columns::{FileRow, column_widths, file_row, header_row};

const ROW_HIGHLIGHT_SYMBOL: &str = ">> ";

/// File inventory table for the selected location.
pub struct FileTablePage<'a> {
    state: &'a PanelState,
    table_state: &'a mut TableState,
}

impl<'a> FileTablePage<'a> {
    pub fn new(state: &'a PanelState, table_state: &'a mut TableState) -> Self {
        Self { state, table_state }
    }
}

impl Page for FileTablePage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let location = self.state.location();
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!("Files · {}", location.label()));

        if self.state.is_loading() {
            let loading = Paragraph::new("Loading…")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            f.render_widget(loading, area);

            return;
        }

        let inventory = self.state.inventory();
        let editing_file = self.state.edit().editing_file();
        let draft = self.state.edit().draft();
        let rows = inventory.entries().iter().map(|entry| {
            let row_draft = if editing_file == Some(entry.name.as_str()) {
                draft
            } else {
                None
            };

            file_row(&FileRow {
                entry,
                draft: row_draft,
            })
        });

        let table = Table::new(rows, column_widths())
            .column_spacing(1)
            .header(header_row())
            .block(block)
            .row_highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol(ROW_HIGHLIGHT_SYMBOL);

        f.render_stateful_widget(table, area, self.table_state);
    }
}
