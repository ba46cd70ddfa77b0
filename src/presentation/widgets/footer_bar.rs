use crate::domain::keybinding::Keybind;
use crate::presentation::theme::Theme;
use crate::presentation::theme::adapter::ColorConverter;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

pub struct FooterBarStyle {
    pub background: Style,
    pub label_style: Style,
    pub key_style: Style,
    pub info: Style,
    pub page_indicator: Style,
}

impl FooterBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        let accent = theme.accent;
        let key_bg = ColorConverter::tint(accent, 0.5, 0.08);

        Self {
            label_style: Style::default()
                .bg(accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            key_style: Style::default().bg(key_bg).fg(Color::White),
            page_indicator: Style::default()
                .bg(key_bg)
                .fg(accent)
                .add_modifier(Modifier::BOLD),
            info: theme.dimmed_style,
            ..Self::default()
        }
    }
}

impl Default for FooterBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            label_style: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            key_style: Style::default().fg(Color::White).bg(Color::DarkGray),
            info: Style::default().fg(Color::DarkGray),
            page_indicator: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        }
    }
}

pub struct FooterBar<'a> {
    keybindings: &'a [Keybind],
    page: Option<&'a str>,
    right_info: Option<&'a str>,
    style: FooterBarStyle,
}

impl<'a> FooterBar<'a> {
    #[must_use]
    pub fn new(keybindings: &'a [Keybind]) -> Self {
        Self {
            keybindings,
            page: None,
            right_info: None,
            style: FooterBarStyle::default(),
        }
    }

    #[must_use]
    pub const fn page(mut self, page: &'a str) -> Self {
        self.page = Some(page);
        self
    }

    #[must_use]
    pub const fn right_info(mut self, info: Option<&'a str>) -> Self {
        self.right_info = info;
        self
    }

    #[must_use]
    pub const fn style(mut self, style: FooterBarStyle) -> Self {
        self.style = style;
        self
    }

    fn format_key(key: &KeyEvent) -> String {
        use std::fmt::Write;
        let mut s = String::new();
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            s.push_str("C-");
        }
        if key.modifiers.contains(KeyModifiers::ALT) {
            s.push_str("A-");
        }
        if key.modifiers.contains(KeyModifiers::SHIFT) && !matches!(key.code, KeyCode::Char(_)) {
            s.push_str("S-");
        }

        match key.code {
            KeyCode::Char(' ') => s.push_str("Space"),
            KeyCode::Char(c) => s.push(c),
            KeyCode::Enter => s.push_str("Enter"),
            KeyCode::Esc => s.push_str("Esc"),
            KeyCode::Tab => s.push_str("Tab"),
            KeyCode::BackTab => s.push_str("S-Tab"),
            KeyCode::Backspace => s.push_str("Bksp"),
            KeyCode::Up => s.push('↑'),
            KeyCode::Down => s.push('↓'),
            KeyCode::Left => s.push('←'),
            KeyCode::Right => s.push('→'),
            KeyCode::F(n) => {
                let _ = write!(s, "F{n}");
            }
            _ => {
                let _ = write!(s, "{:?}", key.code);
            }
        }
        s
    }

    fn build_left_spans(&self) -> Vec<Span<'_>> {
        let mut spans = Vec::new();

        if let Some(page) = self.page {
            spans.push(Span::styled(
                format!(" {} ", page.to_uppercase()),
                self.style.page_indicator,
            ));
            spans.push(Span::raw(" "));
        }

        for (i, binding) in self
            .keybindings
            .iter()
            .filter(|k| k.visible_in_bar)
            .enumerate()
        {
            if i > 0 {
                spans.push(Span::raw(" "));
            }

            spans.push(Span::styled(
                format!(" {} ", binding.label),
                self.style.label_style,
            ));

            let key_text = binding
                .key_display
                .as_deref()
                .map_or_else(|| Self::format_key(&binding.key), ToString::to_string);

            spans.push(Span::styled(format!(" {key_text} "), self.style.key_style));
        }

        spans
    }
}

impl Widget for FooterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let right_width = self
            .right_info
            .map_or(0, |s| u16::try_from(s.width()).unwrap_or(u16::MAX));
        let left_width = area.width.saturating_sub(right_width.saturating_add(1));

        let left_line = Line::from(self.build_left_spans());
        Paragraph::new(left_line).render(Rect::new(area.x, area.y, left_width, 1), buf);

        if let Some(info) = self.right_info
            && right_width < area.width
        {
            let right_x = area.right().saturating_sub(right_width);
            let right_area = Rect::new(right_x, area.y, right_width, 1);
            Paragraph::new(Line::from(Span::styled(info, self.style.info))).render(right_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::keybinding::{card_hidden_bindings, setup_bindings};

    fn row_text(buf: &Buffer, width: u16) -> String {
        (0..width).map(|x| buf[(x, 0)].symbol().to_string()).collect()
    }

    #[test]
    fn test_format_key() {
        assert_eq!(
            FooterBar::format_key(&KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL)),
            "C-r"
        );
        assert_eq!(
            FooterBar::format_key(&KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT)),
            "A-Enter"
        );
        assert_eq!(
            FooterBar::format_key(&KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE)),
            "Space"
        );
    }

    #[test]
    fn test_hidden_bindings_are_not_rendered() {
        let bindings = card_hidden_bindings();
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        FooterBar::new(&bindings).render(area, &mut buf);

        let text = row_text(&buf, 80);
        assert!(text.contains("Reveal"));
        assert!(text.contains("Space"));
        assert!(!text.contains("Enter"));
    }

    #[test]
    fn test_page_and_right_info() {
        let bindings = setup_bindings();
        let area = Rect::new(0, 0, 120, 1);
        let mut buf = Buffer::empty(area);
        FooterBar::new(&bindings)
            .page("Setup")
            .right_info(Some("☀ light"))
            .render(area, &mut buf);

        let text = row_text(&buf, 120);
        assert!(text.starts_with(" SETUP "));
        assert!(text.contains("↓/Tab"));
    }
}
