use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::utils::centered_column;
use crate::domain::keybinding::{Action, Keybind, resolve, reveal_prompt_bindings};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{FooterBar, FooterBarStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptAction {
    None,
    RevealAnswers,
    Quit,
}

/// Pause between the last answer and the discussion.
pub struct RevealPromptScreen {
    bindings: Vec<Keybind>,
}

impl Default for RevealPromptScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl RevealPromptScreen {
    #[must_use]
    pub fn new() -> Self {
        Self {
            bindings: reveal_prompt_bindings(),
        }
    }

    #[must_use]
    pub fn handle_key(&self, key: KeyEvent) -> PromptAction {
        match resolve(&self.bindings, &key) {
            Some(Action::RevealAnswers) => PromptAction::RevealAnswers,
            Some(Action::Quit) => PromptAction::Quit,
            _ => PromptAction::None,
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, player_count: usize, theme: &Theme) {
        let [_, message, _, button, _, footer] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        Paragraph::new(vec![
            Line::styled("Everyone has answered", theme.title_style),
            Line::default(),
            Line::styled(
                format!("Put the device where all {player_count} players can see it."),
                theme.text_style,
            ),
            Line::styled("Ready to see the answers?", theme.dimmed_style),
        ])
        .alignment(Alignment::Center)
        .render(message, buf);

        Paragraph::new("Reveal answers  ⏎")
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .bg(theme.accent)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(theme.border_style),
            )
            .render(centered_column(28, button), buf);

        FooterBar::new(&self.bindings)
            .page("Reveal")
            .style(FooterBarStyle::from_theme(theme))
            .render(footer, buf);
    }
}
