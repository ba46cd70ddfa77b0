use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::presentation::theme::Theme;

/// Yes/no question drawn over the middle of `area`.
pub struct ConfirmPopup<'a> {
    title: &'a str,
    message: &'a str,
    theme: &'a Theme,
}

impl<'a> ConfirmPopup<'a> {
    #[must_use]
    pub fn new(title: &'a str, message: &'a str, theme: &'a Theme) -> Self {
        Self {
            title,
            message,
            theme,
        }
    }

    fn popup_area(&self, area: Rect) -> Rect {
        let max_width = 56.min(area.width);
        let width = u16::try_from(self.message.width())
            .unwrap_or(u16::MAX)
            .saturating_add(4)
            .clamp(30.min(max_width), max_width);
        let inner_width = width.saturating_sub(2).max(1);
        let message_lines = u16::try_from(self.message.width())
            .unwrap_or(u16::MAX)
            .div_ceil(inner_width);
        let height = message_lines.saturating_add(4).min(area.height);

        Rect::new(
            area.x + area.width.saturating_sub(width) / 2,
            area.y + area.height.saturating_sub(height) / 2,
            width,
            height,
        )
    }
}

impl Widget for ConfirmPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = self.popup_area(area);
        if popup.area() == 0 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(self.theme.warning_style)
            .title(format!(" {} ", self.title))
            .title_alignment(Alignment::Center);

        let key = self.theme.title_style;
        let lines = vec![
            Line::from(self.message),
            Line::default(),
            Line::from(vec![
                Span::styled("y", key),
                Span::styled(" confirm   ", self.theme.dimmed_style),
                Span::styled("n", key),
                Span::styled(" cancel", self.theme.dimmed_style),
            ]),
        ];

        Clear.render(popup, buf);
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(self.theme.base_style.add_modifier(Modifier::BOLD))
            .render(popup, buf);
    }
}
