//! File table column descriptors.
//!
//! Each column pairs a header with a pure render function over a typed
//! [`FileRow`], so the table never inspects untyped row data.

use ratatui::layout::{Alignment, Constraint};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Cell, Row};

use crate::domain::file::FileEntry;
use crate::ui::format::{format_modified, format_size};

const DRAFT_CURSOR: &str = "▏";
const ROW_ACTIONS: &str = "⤓ d  ✎ e  ✗ x";
const SAVE_ACTION: &str = "[Save ⏎]";

/// One table row: an entry plus its rename draft when it is being edited.
#[derive(Clone, Copy, Debug)]
pub struct FileRow<'a> {
    pub entry: &'a FileEntry,
    pub draft: Option<&'a str>,
}

/// Static description of one table column.
pub struct Column {
    pub header: &'static str,
    pub width: Constraint,
    pub alignment: Alignment,
    pub render: fn(&FileRow<'_>) -> String,
}

/// Columns of the file table in display order.
pub const FILE_COLUMNS: [Column; 4] = [
    Column {
        header: "Name",
        width: Constraint::Fill(1),
        alignment: Alignment::Left,
        render: name_cell,
    },
    Column {
        header: "Size",
        width: Constraint::Length(10),
        alignment: Alignment::Right,
        render: size_cell,
    },
    Column {
        header: "Modified At",
        width: Constraint::Length(16),
        alignment: Alignment::Right,
        render: modified_cell,
    },
    Column {
        header: "Actions",
        width: Constraint::Length(24),
        alignment: Alignment::Left,
        render: actions_cell,
    },
];

/// Returns the column width constraints.
pub fn column_widths() -> Vec<Constraint> {
    FILE_COLUMNS.iter().map(|column| column.width).collect()
}

/// Builds the header row.
pub fn header_row() -> Row<'static> {
    Row::new(FILE_COLUMNS.iter().map(|column| {
        Cell::from(Line::from(column.header).alignment(column.alignment))
    }))
    .style(Style::default().bg(Color::Gray).fg(Color::Black))
    .height(1)
    .bottom_margin(1)
}

/// Builds one table row by running every column renderer over `row`.
pub fn file_row(row: &FileRow<'_>) -> Row<'static> {
    let cells = FILE_COLUMNS
        .iter()
        .map(|column| Cell::from(Line::from((column.render)(row)).alignment(column.alignment)));
    let style = if row.draft.is_some() {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    Row::new(cells).style(style)
}

fn name_cell(row: &FileRow<'_>) -> String {
    match row.draft {
        Some(draft) => format!("{draft}{DRAFT_CURSOR}"),
        None => row.entry.name.clone(),
    }
}

fn size_cell(row: &FileRow<'_>) -> String {
    format_size(row.entry.size)
}

fn modified_cell(row: &FileRow<'_>) -> String {
    format_modified(row.entry.modified_at)
}

fn actions_cell(row: &FileRow<'_>) -> String {
    if row.draft.is_some() {
        return format!("{ROW_ACTIONS}  {SAVE_ACTION}");
    }

    ROW_ACTIONS.to_string()
}
