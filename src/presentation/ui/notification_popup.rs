use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::domain::{Notification, NotificationLevel};
use crate::presentation::theme::Theme;

/// Toast in the top-right corner.
pub struct NotificationPopup<'a> {
    notification: &'a Notification,
    theme: &'a Theme,
}

impl<'a> NotificationPopup<'a> {
    #[must_use]
    pub fn new(notification: &'a Notification, theme: &'a Theme) -> Self {
        Self {
            notification,
            theme,
        }
    }

    fn popup_area(&self, area: Rect) -> Rect {
        let title = format!(" {} ", self.notification.title);
        let message_width = u16::try_from(self.notification.message.width()).unwrap_or(u16::MAX);

        let max_popup_width = 48.min(area.width.saturating_sub(2));
        let width = message_width
            .max(u16::try_from(title.width()).unwrap_or(0))
            .saturating_add(4)
            .min(max_popup_width);

        let inner_width = width.saturating_sub(2).max(1);
        let lines = message_width.div_ceil(inner_width);
        let height = lines.saturating_add(2).clamp(3, 8);

        let x = area.right().saturating_sub(width).saturating_sub(2);
        Rect::new(x, area.y.saturating_add(1), width, height).intersection(area)
    }
}

impl Widget for NotificationPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = self.popup_area(area);
        if popup_area.area() == 0 {
            return;
        }

        let style = match self.notification.level {
            NotificationLevel::Info => Style::default().fg(self.theme.accent),
            NotificationLevel::Warn => self.theme.warning_style,
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} ", self.notification.title))
            .style(style);

        let para = Paragraph::new(self.notification.message.as_str())
            .block(block)
            .wrap(Wrap { trim: true })
            .style(Style::default().add_modifier(Modifier::BOLD));

        Clear.render(popup_area, buf);
        para.render(popup_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::theme::ThemeVariant;

    #[test]
    fn test_popup_sits_top_right() {
        let theme = Theme::new("#9B5DE5", ThemeVariant::Dark);
        let notification = Notification::new(NotificationLevel::Warn, "Full", "At most 10 players");
        let area = Rect::new(0, 0, 80, 24);
        let popup = NotificationPopup::new(&notification, &theme);
        let rect = popup.popup_area(area);

        assert_eq!(rect.right(), 78);
        assert_eq!(rect.y, 1);
        assert_eq!(rect.height, 3);

        let mut buf = Buffer::empty(area);
        popup.render(area, &mut buf);
        let row: String = (rect.x..rect.right())
            .map(|x| buf[(x, 1)].symbol().to_string())
            .collect();
        assert!(row.contains("Full"));
    }

    #[test]
    fn test_tiny_area_renders_nothing() {
        let theme = Theme::default();
        let notification = Notification::new(NotificationLevel::Info, "Theme", "Light");
        let area = Rect::new(0, 0, 2, 1);
        let mut buf = Buffer::empty(area);
        NotificationPopup::new(&notification, &theme).render(area, &mut buf);
        assert_eq!(buf[(0, 0)].symbol(), " ");
    }
}
