//! Multi-line answer box.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Widget},
};
use tui_textarea::{CursorMove, TextArea};
use unicode_width::UnicodeWidthChar;

use crate::presentation::theme::Theme;

const MAX_ANSWER_LENGTH: usize = 500;
const PLACEHOLDER_TEXT: &str = "Type your answer...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerInputAction {
    Submit(String),
    Edited,
}

pub struct AnswerInputState<'a> {
    textarea: TextArea<'a>,
    focused: bool,
    scroll_offset: usize,
}

impl AnswerInputState<'_> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            textarea: TextArea::default(),
            focused: true,
            scroll_offset: 0,
        }
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    #[must_use]
    pub fn value(&self) -> String {
        self.textarea.lines().join("\n")
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.textarea.lines().iter().all(String::is_empty)
    }

    pub fn set_content(&mut self, content: &str) {
        self.textarea = TextArea::new(content.lines().map(ToString::to_string).collect());
        self.textarea.move_cursor(CursorMove::Bottom);
        self.textarea.move_cursor(CursorMove::End);
    }

    fn char_count(&self) -> usize {
        let lines = self.textarea.lines();
        lines.iter().map(|l| l.chars().count()).sum::<usize>() + lines.len().saturating_sub(1)
    }

    fn enforce_length_limit(&mut self) {
        if self.char_count() > MAX_ANSWER_LENGTH {
            let truncated: String = self.value().chars().take(MAX_ANSWER_LENGTH).collect();
            self.set_content(&truncated);
        }
    }

    /// `Enter` submits; `Alt-Enter` or `Shift-Enter` breaks the line.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<AnswerInputAction> {
        let word = key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

        match key.code {
            KeyCode::Enter
                if !key
                    .modifiers
                    .intersects(KeyModifiers::ALT | KeyModifiers::SHIFT) =>
            {
                return Some(AnswerInputAction::Submit(self.value()));
            }
            KeyCode::Enter => self.textarea.insert_newline(),
            KeyCode::Char(c)
                if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
            {
                self.textarea.insert_char(c);
            }
            KeyCode::Char('w' | 'h') if key.modifiers == KeyModifiers::CONTROL => {
                self.textarea.delete_word();
            }
            KeyCode::Backspace if word => {
                self.textarea.delete_word();
            }
            KeyCode::Backspace => {
                self.textarea.delete_char();
            }
            KeyCode::Delete if word => {
                self.textarea.delete_next_word();
            }
            KeyCode::Delete => {
                self.textarea.delete_next_char();
            }
            KeyCode::Left if word => self.textarea.move_cursor(CursorMove::WordBack),
            KeyCode::Left => self.textarea.move_cursor(CursorMove::Back),
            KeyCode::Right if word => self.textarea.move_cursor(CursorMove::WordForward),
            KeyCode::Right => self.textarea.move_cursor(CursorMove::Forward),
            KeyCode::Up => self.textarea.move_cursor(CursorMove::Up),
            KeyCode::Down => self.textarea.move_cursor(CursorMove::Down),
            KeyCode::Home => self.textarea.move_cursor(CursorMove::Head),
            KeyCode::End => self.textarea.move_cursor(CursorMove::End),
            _ => return None,
        }

        self.enforce_length_limit();
        Some(AnswerInputAction::Edited)
    }

    /// Wraps logical lines to `width`.
    ///
    /// Returns the visual lines and the cursor's visual row and column.
    fn visual_info(&self, width: usize) -> (Vec<String>, usize, usize) {
        let (cursor_row, cursor_col) = self.textarea.cursor();
        let mut visual_lines = Vec::new();
        let mut v_row = 0;
        let mut v_col = 0;

        for (i, line) in self.textarea.lines().iter().enumerate() {
            let is_cursor_line = i == cursor_row;
            let mut current = String::new();
            let mut current_width = 0;

            for (j, ch) in line.chars().enumerate() {
                let ch_width = ch.width().unwrap_or(0);
                if current_width + ch_width > width {
                    visual_lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                if is_cursor_line && j == cursor_col {
                    v_row = visual_lines.len();
                    v_col = current_width;
                }
                current.push(ch);
                current_width += ch_width;
            }

            if is_cursor_line && cursor_col >= line.chars().count() {
                if current_width >= width && width > 0 {
                    visual_lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                v_row = visual_lines.len();
                v_col = current_width;
            }
            visual_lines.push(current);
        }

        (visual_lines, v_row, v_col)
    }

    /// Render using manual rendering instead of tui-textarea's widget
    /// to avoid ratatui version incompatibility (project: 0.30, tui-textarea: 0.29)
    pub fn render_with_style(&mut self, area: Rect, buf: &mut Buffer, style: &AnswerInputStyle) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focused {
                style.border_style_focused
            } else {
                style.border_style
            })
            .title(" Your answer ");
        let inner = block.inner(area);
        block.render(area, buf);

        let width = inner.width as usize;
        let height = inner.height as usize;
        if width == 0 || height == 0 {
            return;
        }

        if self.is_empty() {
            buf.set_stringn(inner.x, inner.y, PLACEHOLDER_TEXT, width, style.placeholder_style);
            if self.focused
                && let Some(cell) = buf.cell_mut((inner.x, inner.y))
            {
                cell.set_style(style.cursor_style);
            }
            return;
        }

        let (visual_lines, v_row, v_col) = self.visual_info(width);
        if v_row >= self.scroll_offset + height {
            self.scroll_offset = v_row + 1 - height;
        } else if v_row < self.scroll_offset {
            self.scroll_offset = v_row;
        }

        for (i, line) in visual_lines
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(height)
        {
            let y = inner.y + u16::try_from(i - self.scroll_offset).unwrap_or(0);
            buf.set_stringn(inner.x, y, line, width, style.text_style);

            if self.focused && i == v_row {
                let cursor_x = inner.x + u16::try_from(v_col).unwrap_or(0);
                if cursor_x < inner.right()
                    && let Some(cell) = buf.cell_mut((cursor_x, y))
                {
                    cell.set_style(style.cursor_style);
                }
            }
        }
    }
}

impl Default for AnswerInputState<'_> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct AnswerInputStyle {
    pub border_style: Style,
    pub border_style_focused: Style,
    pub text_style: Style,
    pub placeholder_style: Style,
    pub cursor_style: Style,
}

impl AnswerInputStyle {
    /// Styles the box in the colour of the player answering.
    #[must_use]
    pub fn for_player(theme: &Theme, index: usize) -> Self {
        Self {
            border_style: theme.dimmed_style,
            border_style_focused: Style::default().fg(theme.player_color(index)),
            text_style: theme.text_style,
            placeholder_style: theme.dimmed_style.add_modifier(Modifier::ITALIC),
            cursor_style: Style::default().add_modifier(Modifier::REVERSED),
        }
    }
}

impl Default for AnswerInputStyle {
    fn default() -> Self {
        Self {
            border_style: Style::default().fg(Color::Gray),
            border_style_focused: Style::default().fg(Color::Cyan),
            text_style: Style::default(),
            placeholder_style: Style::default().fg(Color::DarkGray),
            cursor_style: Style::default().add_modifier(Modifier::REVERSED),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(state: &mut AnswerInputState<'_>, text: &str) {
        for c in text.chars() {
            state.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_typing_and_submit() {
        let mut state = AnswerInputState::new();
        type_str(&mut state, "pizza");

        assert_eq!(
            state.handle_key(key(KeyCode::Enter)),
            Some(AnswerInputAction::Submit("pizza".to_string()))
        );
    }

    #[test]
    fn test_alt_enter_inserts_newline() {
        let mut state = AnswerInputState::new();
        type_str(&mut state, "one");
        let action = state.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT));
        assert_eq!(action, Some(AnswerInputAction::Edited));
        type_str(&mut state, "two");

        assert_eq!(state.value(), "one\ntwo");
    }

    #[test]
    fn test_ctrl_backspace_deletes_word() {
        let mut state = AnswerInputState::new();
        state.set_content("hello world");
        state.handle_key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::CONTROL));

        assert_eq!(state.value(), "hello ");
    }

    #[test]
    fn test_length_is_capped() {
        let mut state = AnswerInputState::new();
        state.set_content(&"a".repeat(MAX_ANSWER_LENGTH));
        state.handle_key(key(KeyCode::Char('b')));

        assert_eq!(state.value().chars().count(), MAX_ANSWER_LENGTH);
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        let mut state = AnswerInputState::new();
        assert_eq!(state.handle_key(key(KeyCode::F(2))), None);
        assert!(state.is_empty());
    }

    #[test]
    fn test_wrapping_moves_cursor_to_next_row() {
        let mut state = AnswerInputState::new();
        state.set_content("abcdef");
        let (lines, row, col) = state.visual_info(4);

        assert_eq!(lines, vec!["abcd".to_string(), "ef".to_string()]);
        assert_eq!((row, col), (1, 2));
    }

    #[test]
    fn test_render_placeholder() {
        let mut state = AnswerInputState::new();
        let area = Rect::new(0, 0, 30, 4);
        let mut buf = Buffer::empty(area);
        state.render_with_style(area, &mut buf, &AnswerInputStyle::default());

        let row: String = (1..5).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert_eq!(row, "Type");
    }
}
