use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use super::utils::{centered_column, wrapped_height};
use crate::domain::GameState;
use crate::domain::keybinding::{Action, Keybind, discussion_bindings, resolve};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{FooterBar, FooterBarStyle};

const COLUMN_WIDTH: u16 = 72;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscussionAction {
    None,
    RevealImpostor,
    Quit,
}

/// The crew question and every answer, for the group to argue over.
pub struct DiscussionScreen {
    scroll: u16,
    bindings: Vec<Keybind>,
}

impl Default for DiscussionScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl DiscussionScreen {
    #[must_use]
    pub fn new() -> Self {
        Self {
            scroll: 0,
            bindings: discussion_bindings(),
        }
    }

    #[must_use]
    pub const fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DiscussionAction {
        match resolve(&self.bindings, &key) {
            Some(Action::RevealImpostor) => DiscussionAction::RevealImpostor,
            Some(Action::Quit) => DiscussionAction::Quit,
            Some(Action::ScrollUp) => {
                self.scroll = self.scroll.saturating_sub(1);
                DiscussionAction::None
            }
            Some(Action::ScrollDown) => {
                self.scroll = self.scroll.saturating_add(1);
                DiscussionAction::None
            }
            _ => DiscussionAction::None,
        }
    }

    fn answer_lines<'a>(state: &'a GameState, theme: &Theme) -> Vec<Line<'a>> {
        let mut lines = Vec::new();
        for (i, (name, answer)) in state.answer_sheet().enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            lines.push(Line::from(vec![
                Span::styled("● ", theme.player_style(i)),
                Span::styled(name, theme.player_style(i)),
            ]));
            if answer.trim().is_empty() {
                lines.push(Line::styled(
                    "  (no answer)",
                    theme.dimmed_style.add_modifier(Modifier::ITALIC),
                ));
            } else {
                lines.extend(
                    answer
                        .lines()
                        .map(|l| Line::styled(format!("  {l}"), theme.text_style)),
                );
            }
        }
        lines
    }

    pub fn render(&mut self, area: Rect, buf: &mut Buffer, state: &GameState, theme: &Theme) {
        let question = state
            .question_pair()
            .map_or("", |pair| pair.question.as_str());
        let column = centered_column(COLUMN_WIDTH, area);
        let question_height = wrapped_height(question, column.width.saturating_sub(2)) + 2;

        let [_, question_area, _, answers_area, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(question_height),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(column);

        Paragraph::new(question)
            .style(theme.text_style.add_modifier(Modifier::BOLD))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(theme.border_style)
                    .title(" The question was ")
                    .title_style(theme.title_style),
            )
            .render(question_area, buf);

        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(theme.dimmed_style)
            .title(" Answers ")
            .title_style(theme.title_style);
        let inner = block.inner(answers_area);
        block.render(answers_area, buf);

        let lines = Self::answer_lines(state, theme);
        let wrap_width = usize::from(inner.width.max(1));
        let total: usize = lines
            .iter()
            .map(|line| line.width().max(1).div_ceil(wrap_width))
            .sum();
        let total = u16::try_from(total).unwrap_or(u16::MAX);
        self.scroll = self.scroll.min(total.saturating_sub(inner.height));
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(inner, buf);

        FooterBar::new(&self.bindings)
            .page(state.page().title())
            .style(FooterBarStyle::from_theme(theme))
            .render(Rect::new(area.x, footer.y, area.width, 1), buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{QuestionPair, Roster, RosterBounds};
    use crate::domain::game::{GameAction, transition};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn discussion_state() -> GameState {
        let bounds = RosterBounds::STANDARD;
        let mut state = GameState::new(Roster::from(vec!["Amy", "Bo", "Cid"]));
        let actions = [
            GameAction::StartGame {
                pair: QuestionPair::new("Best snack?", "Worst snack?"),
                impostor: 2,
            },
            GameAction::RecordAnswer("Crisps".into()),
            GameAction::AdvanceTurn,
            GameAction::AdvanceTurn,
            GameAction::RecordAnswer("Liquorice".into()),
            GameAction::AdvanceTurn,
            GameAction::RevealAnswers,
        ];
        for action in actions {
            state = transition(state, action, bounds);
        }
        state
    }

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_render_lists_every_answer_with_crew_question() {
        let state = discussion_state();
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        DiscussionScreen::new().render(area, &mut buf, &state, &Theme::default());

        let text = buffer_text(&buf);
        assert!(text.contains("Best snack?"));
        assert!(!text.contains("Worst snack?"));
        assert!(text.contains("Crisps"));
        assert!(text.contains("(no answer)"));
        assert!(text.contains("Liquorice"));
    }

    #[test]
    fn test_scroll_is_clamped_to_content() {
        let state = discussion_state();
        let mut screen = DiscussionScreen::new();
        for _ in 0..50 {
            screen.handle_key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
        }
        let area = Rect::new(0, 0, 80, 40);
        let mut buf = Buffer::empty(area);
        screen.render(area, &mut buf, &state, &Theme::default());

        assert_eq!(screen.scroll(), 0);
    }

    #[test]
    fn test_enter_reveals_impostor() {
        let mut screen = DiscussionScreen::new();
        assert_eq!(
            screen.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            DiscussionAction::RevealImpostor
        );
        screen.handle_key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
        assert_eq!(screen.scroll(), 0);
    }
}
