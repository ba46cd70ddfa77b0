use std::time::Duration;

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};
use tachyonfx::{Effect, Interpolation, fx};

use super::utils::{centered_column, wrapped_height};
use crate::domain::GameState;
use crate::domain::keybinding::{Action, Keybind, resolve, reveal_bindings};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{FooterBar, FooterBarStyle};

const PANEL_WIDTH: u16 = 60;
const REVEAL_EFFECT_MS: u32 = 800;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealAction {
    None,
    PlayAgain,
    Quit,
}

/// Names the impostor with their question and answer.
pub struct RevealScreen {
    intro_effect: Option<Effect>,
    pending_duration: Duration,
    bindings: Vec<Keybind>,
}

impl RevealScreen {
    #[must_use]
    pub fn new(animations: bool) -> Self {
        Self {
            intro_effect: animations
                .then(|| fx::coalesce((REVEAL_EFFECT_MS, Interpolation::CircOut))),
            pending_duration: Duration::ZERO,
            bindings: reveal_bindings(),
        }
    }

    pub fn tick(&mut self, duration: Duration) {
        if self.intro_effect.is_some() {
            self.pending_duration = self.pending_duration.saturating_add(duration);
        }
    }

    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.intro_effect.is_some()
    }

    #[must_use]
    pub fn handle_key(&self, key: KeyEvent) -> RevealAction {
        match resolve(&self.bindings, &key) {
            Some(Action::PlayAgain) => RevealAction::PlayAgain,
            Some(Action::Quit) => RevealAction::Quit,
            _ => RevealAction::None,
        }
    }

    pub fn render(&mut self, area: Rect, buf: &mut Buffer, state: &GameState, theme: &Theme) {
        let impostor = state.impostor_index().unwrap_or_default();
        let name = state.impostor_name().unwrap_or_default();
        let question = state
            .question_pair()
            .map_or("", |pair| pair.impostor_question.as_str());
        let answer = state.impostor_answer().unwrap_or_default();
        let text_width = PANEL_WIDTH.saturating_sub(4);

        let mut lines = vec![
            Line::styled("The impostor was", theme.dimmed_style),
            Line::default(),
            Line::styled(
                name.to_uppercase(),
                theme.player_style(impostor).add_modifier(Modifier::UNDERLINED),
            ),
            Line::default(),
            Line::styled("Their question", theme.dimmed_style),
            Line::styled(question.to_string(), theme.text_style.add_modifier(Modifier::BOLD)),
            Line::default(),
            Line::styled("Their answer", theme.dimmed_style),
        ];
        if answer.trim().is_empty() {
            lines.push(Line::styled(
                "(no answer)",
                theme.dimmed_style.add_modifier(Modifier::ITALIC),
            ));
        } else {
            lines.extend(answer.lines().map(|l| Line::styled(l.to_string(), theme.text_style)));
        }

        let panel_height =
            8 + wrapped_height(question, text_width) + wrapped_height(answer, text_width) + 2;

        let [_, panel, _, button, _, footer] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(panel_height),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);
        let panel = centered_column(PANEL_WIDTH, panel);

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Thick)
                    .border_style(theme.player_style(impostor))
                    .style(Style::default().bg(theme.player_wash(impostor))),
            )
            .render(panel, buf);

        if let Some(effect) = self.intro_effect.as_mut() {
            let duration = std::mem::take(&mut self.pending_duration);
            if effect.process(duration.into(), buf, panel).is_some() {
                self.intro_effect = None;
            }
        }

        Paragraph::new("Restart game  ⏎")
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
            .render(centered_column(26, button), buf);

        FooterBar::new(&self.bindings)
            .page("Reveal")
            .style(FooterBarStyle::from_theme(theme))
            .render(footer, buf);
    }
}
