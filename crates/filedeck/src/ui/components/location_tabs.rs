use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Paragraph, Tabs};

use crate::domain::file::Location;
use crate::ui::Component;

/// Top bar with the app title and the location selector.
pub struct LocationTabs {
    location: Location,
}

impl LocationTabs {
    pub fn new(location: Location) -> Self {
        Self { location }
    }
}

impl Component for LocationTabs {
    fn render(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::horizontal([Constraint::Length(18), Constraint::Min(0)]).split(area);
        let version = env!("CARGO_PKG_VERSION");
        let title = Paragraph::new(Span::styled(
            format!(" Files v{version}"),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(Color::DarkGray));

        let tabs = Tabs::new(Location::ALL.map(Location::label))
            .select(self.location.index())
            .style(Style::default().bg(Color::DarkGray).fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
            .divider("|");

        f.render_widget(title, chunks[0]);
        f.render_widget(tabs, chunks[1]);
    }
}
