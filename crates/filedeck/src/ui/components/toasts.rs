use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::app::state::NotificationQueue;
use crate::domain::notification::{Notification, NotificationStatus};
use crate::ui::Component;

const MAX_TOAST_WIDTH: u16 = 48;
const MIN_TOAST_WIDTH: u16 = 20;

/// Stack of toasts drawn over the top-right corner of the content area,
/// newest at the bottom.
pub struct Toasts<'a> {
    notifications: &'a NotificationQueue,
}

impl<'a> Toasts<'a> {
    pub fn new(notifications: &'a NotificationQueue) -> Self {
        Self { notifications }
    }
}

impl Component for Toasts<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let mut top = area.y.saturating_add(1);
        let bottom = area.y.saturating_add(area.height);

        for notification in self.notifications.iter() {
            let width = toast_width(notification).min(area.width.saturating_sub(2));
            let height = toast_height(notification);
            if width == 0 || top.saturating_add(height) > bottom {
                break;
            }

            let x = area
                .x
                .saturating_add(area.width)
                .saturating_sub(width.saturating_add(1));
            let toast_area = Rect::new(x, top, width, height);
            let color = status_color(notification.status);
            let toast = Paragraph::new(notification.description.clone().unwrap_or_default())
                .wrap(Wrap { trim: true })
                .style(Style::default().fg(Color::White))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(color))
                        .title(notification.title.as_str()),
                );

            f.render_widget(Clear, toast_area);
            f.render_widget(toast, toast_area);
            top = top.saturating_add(height);
        }
    }
}

/// Returns the border color used for one toast status.
fn status_color(status: NotificationStatus) -> Color {
    match status {
        NotificationStatus::Success => Color::Green,
        NotificationStatus::Info => Color::LightBlue,
        NotificationStatus::Error => Color::Red,
    }
}

fn toast_width(notification: &Notification) -> u16 {
    let title_width = notification.title.width();
    let description_width = notification.description.as_deref().map_or(0, str::width);
    let content_width = title_width.max(description_width).saturating_add(4);

    u16::try_from(content_width)
        .unwrap_or(MAX_TOAST_WIDTH)
        .clamp(MIN_TOAST_WIDTH, MAX_TOAST_WIDTH)
}

fn toast_height(notification: &Notification) -> u16 {
    if notification.description.is_some() { 3 } else { 2 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_width_is_clamped() {
        // Arrange
        let short = Notification::success("ok");
        let long = Notification::error("Failed to download file", "x".repeat(200));

        // Act
        let short_width = toast_width(&short);
        let long_width = toast_width(&long);

        // Assert
        assert_eq!(short_width, MIN_TOAST_WIDTH);
        assert_eq!(long_width, MAX_TOAST_WIDTH);
    }

    #[test]
    fn test_toast_without_description_is_title_only() {
        // Arrange
        let notification = Notification::success("File uploaded successfully.");

        // Act
        let height = toast_height(&notification);

        // Assert
        assert_eq!(height, 2);
    }
}
