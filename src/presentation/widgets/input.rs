//! Single-line text input widget.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Text input field widget.
#[derive(Debug, Clone)]
pub struct TextInput {
    value: String,
    /// Cursor position in chars.
    cursor: usize,
    focused: bool,
    placeholder: String,
    label: String,
    accent: Color,
    muted: Color,
}

impl TextInput {
    /// Creates new input with label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            focused: false,
            placeholder: String::new(),
            label: label.into(),
            accent: Color::Cyan,
            muted: Color::DarkGray,
        }
    }

    /// Sets placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Sets the border colour used while focused and the colour for placeholder text.
    pub fn set_colors(&mut self, accent: Color, muted: Color) {
        self.accent = accent;
        self.muted = muted;
    }

    /// Sets focus state.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Returns current value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Sets value and moves the cursor to the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.chars().count();
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(i, _)| i)
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    /// Inserts character at cursor.
    pub fn input_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Deletes character before cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    /// Deletes character at cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Applies an editing key. Returns `true` when the value changed.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return false;
        }
        match key.code {
            KeyCode::Char(c) => {
                self.input_char(c);
                true
            }
            KeyCode::Backspace => {
                let before = self.cursor;
                self.backspace();
                before != self.cursor
            }
            KeyCode::Delete => {
                let before = self.value.len();
                self.delete();
                before != self.value.len()
            }
            KeyCode::Left => {
                self.move_left();
                false
            }
            KeyCode::Right => {
                self.move_right();
                false
            }
            KeyCode::Home => {
                self.move_start();
                false
            }
            KeyCode::End => {
                self.move_end();
                false
            }
            _ => false,
        }
    }

    fn cursor_offset(&self) -> usize {
        let at = self.byte_index(self.cursor);
        self.value[..at].width()
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.muted)
        };

        let (display, text_style) = if self.value.is_empty() {
            (
                self.placeholder.as_str(),
                Style::default()
                    .fg(self.muted)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            (self.value.as_str(), Style::default())
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if self.focused {
                BorderType::Thick
            } else {
                BorderType::Rounded
            })
            .border_style(border_style)
            .title(self.label.as_str());

        let inner = block.inner(area);
        block.render(area, buf);
        Paragraph::new(display).style(text_style).render(inner, buf);

        if self.focused && inner.width > 0 && inner.height > 0 {
            let offset = u16::try_from(self.cursor_offset()).unwrap_or(u16::MAX);
            let cursor_x = inner.x.saturating_add(offset);
            if cursor_x < inner.right() {
                buf[(cursor_x, inner.y)]
                    .set_style(Style::default().add_modifier(Modifier::REVERSED));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_input_basic() {
        let mut input = TextInput::new("Player 1");
        assert!(input.value().is_empty());

        input.input_char('a');
        input.input_char('b');
        assert_eq!(input.value(), "ab");

        input.backspace();
        assert_eq!(input.value(), "a");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInput::new("Player 1");
        input.set_value("Zoë");
        input.backspace();
        assert_eq!(input.value(), "Zo");

        input.move_start();
        input.input_char('É');
        assert_eq!(input.value(), "ÉZo");
        input.delete();
        assert_eq!(input.value(), "Éo");
    }

    #[test]
    fn test_handle_key_reports_edits() {
        let mut input = TextInput::new("Player 1");
        assert!(input.handle_key(&KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)));
        assert!(input.handle_key(&KeyEvent::new(KeyCode::Char('X'), KeyModifiers::SHIFT)));
        assert!(!input.handle_key(&KeyEvent::new(KeyCode::Left, KeyModifiers::NONE)));
        assert!(!input.handle_key(&KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL)));
        assert_eq!(input.value(), "xX");

        input.move_start();
        assert!(!input.handle_key(&KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)));
    }

    #[test]
    fn test_render_shows_placeholder() {
        let input = TextInput::new("Player 1").placeholder("Name");
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        (&input).render(area, &mut buf);

        let row: String = (1..5).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert_eq!(row, "Name");
    }
}
