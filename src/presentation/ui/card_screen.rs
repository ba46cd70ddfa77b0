//! Per-player card: reveal, answer, pass on.

use std::time::{Duration, Instant};

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};
use tachyonfx::{Effect, Interpolation, fx};
use tracing::debug;

use super::utils::{centered_column, wrapped_height};
use crate::domain::GameState;
use crate::domain::keybinding::{
    Action, Keybind, card_hidden_bindings, card_revealed_bindings, confirm_bindings, resolve,
};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{
    AnswerInputAction, AnswerInputState, AnswerInputStyle, ConfirmPopup, FooterBar,
    FooterBarStyle,
};

const CARD_WIDTH: u16 = 54;
const ANSWER_HEIGHT: u16 = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    None,
    Submit(String),
    RestartRound,
    Quit,
}

pub struct CardScreen {
    player: usize,
    revealed: bool,
    revealed_at: Option<Instant>,
    reveal_delay: Duration,
    animations: bool,
    flip_effect: Option<Effect>,
    pending_duration: Duration,
    confirming_restart: bool,
    answer: AnswerInputState<'static>,
    hidden_bindings: Vec<Keybind>,
    revealed_bindings: Vec<Keybind>,
    confirm_bindings: Vec<Keybind>,
}

impl CardScreen {
    #[must_use]
    pub fn new(player: usize, reveal_delay: Duration, animations: bool) -> Self {
        Self {
            player,
            revealed: false,
            revealed_at: None,
            reveal_delay,
            animations,
            flip_effect: None,
            pending_duration: Duration::ZERO,
            confirming_restart: false,
            answer: AnswerInputState::new(),
            hidden_bindings: card_hidden_bindings(),
            revealed_bindings: card_revealed_bindings(),
            confirm_bindings: confirm_bindings(),
        }
    }

    /// Roster index of the player holding the device.
    #[must_use]
    pub const fn player(&self) -> usize {
        self.player
    }

    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub const fn is_confirming_restart(&self) -> bool {
        self.confirming_restart
    }

    /// Whether enough time has passed since the reveal to accept an answer.
    #[must_use]
    pub fn submit_ready(&self, now: Instant) -> bool {
        self.revealed_at
            .is_some_and(|at| now.saturating_duration_since(at) >= self.reveal_delay)
    }

    /// Turns the card over. Has no effect once the card is face up.
    pub fn reveal(&mut self, now: Instant) {
        if self.revealed {
            return;
        }
        self.revealed = true;
        self.revealed_at = Some(now);
        if self.animations {
            let millis = u32::try_from(self.reveal_delay.as_millis()).unwrap_or(u32::MAX);
            self.flip_effect = Some(fx::coalesce((millis, Interpolation::CircOut)));
        }
        debug!(player = self.player, "Card revealed");
    }

    pub fn tick(&mut self, duration: Duration) {
        if self.flip_effect.is_some() {
            self.pending_duration = self.pending_duration.saturating_add(duration);
        }
    }

    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.flip_effect.is_some()
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> CardAction {
        if self.confirming_restart {
            return match resolve(&self.confirm_bindings, &key) {
                Some(Action::Confirm) => {
                    self.confirming_restart = false;
                    CardAction::RestartRound
                }
                Some(Action::Cancel) => {
                    self.confirming_restart = false;
                    self.answer.set_focused(true);
                    CardAction::None
                }
                _ => CardAction::None,
            };
        }

        let bindings = if self.revealed {
            &self.revealed_bindings
        } else {
            &self.hidden_bindings
        };
        match resolve(bindings, &key) {
            Some(Action::Quit) => return CardAction::Quit,
            Some(Action::RestartRound) => {
                self.confirming_restart = true;
                self.answer.set_focused(false);
                return CardAction::None;
            }
            Some(Action::RevealCard) => {
                self.reveal(now);
                return CardAction::None;
            }
            _ => {}
        }

        if !self.revealed {
            return CardAction::None;
        }

        match self.answer.handle_key(key) {
            Some(AnswerInputAction::Submit(text)) if self.submit_ready(now) => {
                CardAction::Submit(text)
            }
            Some(AnswerInputAction::Submit(_)) => {
                debug!(player = self.player, "Answer submitted before reveal delay");
                CardAction::None
            }
            Some(AnswerInputAction::Edited) | None => CardAction::None,
        }
    }

    fn current_bindings(&self) -> &[Keybind] {
        if self.confirming_restart {
            &self.confirm_bindings
        } else if self.revealed {
            &self.revealed_bindings
        } else {
            &self.hidden_bindings
        }
    }

    fn render_card(&mut self, area: Rect, buf: &mut Buffer, state: &GameState, theme: &Theme) {
        let player_style = theme.player_style(self.player);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if self.revealed {
                BorderType::Rounded
            } else {
                BorderType::Double
            })
            .border_style(player_style)
            .style(Style::default().bg(theme.player_wash(self.player)));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = if self.revealed {
            let question = state.question_for(self.player).unwrap_or_default();
            vec![
                Line::styled("Your question", theme.dimmed_style),
                Line::default(),
                Line::styled(question.to_string(), theme.text_style.add_modifier(Modifier::BOLD)),
            ]
        } else {
            vec![
                Line::default(),
                Line::styled("?", player_style),
                Line::default(),
                Line::styled("Make sure nobody else is looking", theme.dimmed_style),
                Line::from(vec![
                    Span::styled("Press ", theme.dimmed_style),
                    Span::styled("Space", theme.title_style),
                    Span::styled(" to reveal your card", theme.dimmed_style),
                ]),
            ]
        };

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);

        if let Some(effect) = self.flip_effect.as_mut() {
            let duration = std::mem::take(&mut self.pending_duration);
            if effect.process(duration.into(), buf, area).is_some() {
                self.flip_effect = None;
            }
        }
    }

    pub fn render(&mut self, area: Rect, buf: &mut Buffer, state: &GameState, theme: &Theme) {
        let name = state.roster().name(self.player).unwrap_or_default();
        let question_height = state
            .question_for(self.player)
            .map_or(1, |q| wrapped_height(q, CARD_WIDTH - 4));
        let card_height = if self.revealed {
            question_height + 4
        } else {
            7
        };
        let answer_height = if self.revealed { ANSWER_HEIGHT } else { 0 };

        let [_, heading, _, card, _, answer, _, footer] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(card_height),
            Constraint::Length(1),
            Constraint::Length(answer_height),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        Paragraph::new(vec![
            Line::from(vec![
                Span::styled("Pass the device to ", theme.text_style),
                Span::styled(name.to_string(), theme.player_style(self.player)),
            ]),
            Line::styled(
                format!("Player {} of {}", self.player + 1, state.roster().len()),
                theme.dimmed_style,
            ),
        ])
        .alignment(Alignment::Center)
        .render(heading, buf);

        self.render_card(centered_column(CARD_WIDTH, card), buf, state, theme);

        if self.revealed {
            let style = AnswerInputStyle::for_player(theme, self.player);
            self.answer
                .render_with_style(centered_column(CARD_WIDTH, answer), buf, &style);
        }

        FooterBar::new(self.current_bindings())
            .page(state.page().title())
            .style(FooterBarStyle::from_theme(theme))
            .render(footer, buf);

        if self.confirming_restart {
            ConfirmPopup::new(
                "Restart round",
                "Go back to setup? Everyone's answers will be lost.",
                theme,
            )
            .render(area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{QuestionPair, Roster, RosterBounds};
    use crate::domain::game::{GameAction, transition};
    use crossterm::event::{KeyCode, KeyModifiers};

    const DELAY: Duration = Duration::from_millis(600);

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn round_state() -> GameState {
        let state = GameState::new(Roster::from(vec!["Amy", "Bo", "Cid"]));
        transition(
            state,
            GameAction::StartGame {
                pair: QuestionPair::new("Best pizza topping?", "Worst pizza topping?"),
                impostor: 1,
            },
            RosterBounds::STANDARD,
        )
    }

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        (area.top()..area.bottom())
            .flat_map(|y| (area.left()..area.right()).map(move |x| (x, y)))
            .map(|pos| buf[pos].symbol().to_string())
            .collect()
    }

    fn type_answer(screen: &mut CardScreen, text: &str, now: Instant) {
        for c in text.chars() {
            screen.handle_key(key(KeyCode::Char(c)), now);
        }
    }

    #[test]
    fn test_reveal_is_single_use() {
        let start = Instant::now();
        let mut screen = CardScreen::new(0, DELAY, false);
        assert!(!screen.is_revealed());

        screen.handle_key(key(KeyCode::Char(' ')), start);
        assert!(screen.is_revealed());

        let later = start + Duration::from_millis(300);
        screen.handle_key(key(KeyCode::Char(' ')), later);
        assert_eq!(screen.revealed_at, Some(start));
    }

    #[test]
    fn test_typing_before_reveal_is_ignored() {
        let now = Instant::now();
        let mut screen = CardScreen::new(0, DELAY, false);
        type_answer(&mut screen, "abc", now);
        screen.reveal(now);

        assert!(screen.answer.is_empty());
    }

    #[test]
    fn test_submit_waits_for_reveal_delay() {
        let start = Instant::now();
        let mut screen = CardScreen::new(0, DELAY, false);
        screen.reveal(start);
        type_answer(&mut screen, "Pineapple", start);

        assert_eq!(
            screen.handle_key(key(KeyCode::Enter), start + Duration::from_millis(100)),
            CardAction::None
        );
        assert_eq!(
            screen.handle_key(key(KeyCode::Enter), start + DELAY),
            CardAction::Submit("Pineapple".to_string())
        );
    }

    #[test]
    fn test_restart_requires_confirmation() {
        let now = Instant::now();
        let mut screen = CardScreen::new(0, DELAY, false);
        let restart = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);

        assert_eq!(screen.handle_key(restart, now), CardAction::None);
        assert!(screen.is_confirming_restart());
        assert_eq!(screen.handle_key(key(KeyCode::Char('n')), now), CardAction::None);
        assert!(!screen.is_confirming_restart());

        screen.handle_key(restart, now);
        assert_eq!(screen.handle_key(key(KeyCode::Esc), now), CardAction::None);
        assert!(!screen.is_confirming_restart());

        screen.handle_key(restart, now);
        assert_eq!(
            screen.handle_key(key(KeyCode::Char('y')), now),
            CardAction::RestartRound
        );
    }

    #[test]
    fn test_confirm_dialog_swallows_other_keys() {
        let now = Instant::now();
        let mut screen = CardScreen::new(0, DELAY, false);
        screen.handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL), now);
        screen.handle_key(key(KeyCode::Char(' ')), now);

        assert!(!screen.is_revealed());
        assert!(screen.is_confirming_restart());
    }

    #[test]
    fn test_animation_runs_only_when_enabled() {
        let now = Instant::now();
        let mut animated = CardScreen::new(0, DELAY, true);
        animated.reveal(now);
        assert!(animated.is_animating());

        let mut plain = CardScreen::new(0, DELAY, false);
        plain.reveal(now);
        assert!(!plain.is_animating());
    }

    #[test]
    fn test_render_hides_question_until_revealed() {
        let state = round_state();
        let theme = Theme::default();
        let area = Rect::new(0, 0, 80, 30);
        let mut screen = CardScreen::new(1, DELAY, false);

        let mut buf = Buffer::empty(area);
        screen.render(area, &mut buf, &state, &theme);
        let hidden = buffer_text(&buf);
        assert!(hidden.contains("Pass the device to Bo"));
        assert!(!hidden.contains("pizza"));

        screen.reveal(Instant::now());
        let mut buf = Buffer::empty(area);
        screen.render(area, &mut buf, &state, &theme);
        let shown = buffer_text(&buf);
        assert!(shown.contains("Worst pizza topping?"));
        assert!(!shown.contains("Impostor"));
    }

    #[test]
    fn test_render_shows_confirm_popup() {
        let state = round_state();
        let area = Rect::new(0, 0, 80, 30);
        let mut screen = CardScreen::new(0, DELAY, false);
        screen.handle_key(
            KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL),
            Instant::now(),
        );

        let mut buf = Buffer::empty(area);
        screen.render(area, &mut buf, &state, &Theme::default());
        assert!(buffer_text(&buf).contains("Restart round"));
    }
}
