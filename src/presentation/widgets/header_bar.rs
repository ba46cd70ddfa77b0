use crate::presentation::theme::adapter::ColorConverter;
use crate::presentation::theme::{Theme, ThemeVariant};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

pub struct HeaderBarStyle {
    pub background: Style,
    pub app_name: Style,
    pub version: Style,
    pub theme_toggle: Style,
}

impl HeaderBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        let accent = theme.accent;
        let version_bg = ColorConverter::tint(accent, 0.5, 0.08);

        Self {
            app_name: Style::default()
                .bg(accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            version: Style::default().bg(version_bg).fg(Color::White),
            theme_toggle: theme.title_style,
            ..Self::default()
        }
    }
}

impl Default for HeaderBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            app_name: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            version: Style::default().fg(Color::DarkGray),
            theme_toggle: Style::default().fg(Color::Yellow),
        }
    }
}

/// Top bar shown on the setup page: app name, version and the theme toggle.
pub struct HeaderBar<'a> {
    app_name: &'a str,
    version: &'a str,
    variant: ThemeVariant,
    style: HeaderBarStyle,
}

impl<'a> HeaderBar<'a> {
    #[must_use]
    pub fn new(app_name: &'a str, version: &'a str) -> Self {
        Self {
            app_name,
            version,
            variant: ThemeVariant::default(),
            style: HeaderBarStyle::default(),
        }
    }

    #[must_use]
    pub const fn variant(mut self, variant: ThemeVariant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub const fn style(mut self, style: HeaderBarStyle) -> Self {
        self.style = style;
        self
    }

    fn toggle_text(&self) -> String {
        format!(" {} C-t ", self.variant.toggle_hint())
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let name = format!(" {} ", self.app_name.to_uppercase());
        let version = format!(" v{} ", self.version);
        let left_width = u16::try_from(name.width() + 1 + version.width()).unwrap_or(u16::MAX);
        let left_line = Line::from(vec![
            Span::styled(name, self.style.app_name),
            Span::raw(" "),
            Span::styled(version, self.style.version),
        ]);
        let left_area = Rect::new(area.x, area.y, left_width.min(area.width), 1);
        Paragraph::new(left_line).render(left_area, buf);

        let toggle = self.toggle_text();
        let toggle_width = u16::try_from(toggle.width()).unwrap_or(u16::MAX);
        if toggle_width < area.width.saturating_sub(left_width) {
            let right_x = area.right().saturating_sub(toggle_width);
            let right_area = Rect::new(right_x, area.y, toggle_width, 1);
            Paragraph::new(Line::from(Span::styled(toggle, self.style.theme_toggle)))
                .render(right_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_text_names_other_variant() {
        let header = HeaderBar::new("impostor", "0.1.0").variant(ThemeVariant::Light);
        assert_eq!(header.toggle_text(), " ☾ dark C-t ");
    }

    #[test]
    fn test_render_places_name_and_toggle() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        HeaderBar::new("impostor", "0.1.0").render(area, &mut buf);

        let text: String = (0..60).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert!(text.starts_with(" IMPOSTOR   v0.1.0 "));
        assert!(text.trim_end().ends_with("light C-t"));
    }
}
