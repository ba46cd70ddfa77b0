//! Roster setup screen.

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::utils::centered_column;
use crate::domain::entities::{Roster, RosterBounds};
use crate::domain::keybinding::{Action, Keybind, resolve, setup_bindings};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{FooterBar, FooterBarStyle, HeaderBar, HeaderBarStyle, TextInput};

const SLOT_HEIGHT: u16 = 3;
const COLUMN_WIDTH: u16 = 56;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupAction {
    None,
    Rename { index: usize, name: String },
    AddPlayer,
    RemovePlayer(usize),
    StartGame,
    ToggleTheme,
    Quit,
}

/// One text input per roster slot.
pub struct SetupScreen {
    inputs: Vec<TextInput>,
    focus: usize,
    bindings: Vec<Keybind>,
}

impl Default for SetupScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl SetupScreen {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inputs: Vec::new(),
            focus: 0,
            bindings: setup_bindings(),
        }
    }

    #[must_use]
    pub const fn focus(&self) -> usize {
        self.focus
    }

    /// Moves focus to the slot at `index`, clamped to the roster.
    pub fn focus_slot(&mut self, index: usize) {
        self.focus = index.min(self.inputs.len().saturating_sub(1));
        for (i, input) in self.inputs.iter_mut().enumerate() {
            input.set_focused(i == self.focus);
        }
    }

    /// Mirrors the roster into the inputs.
    ///
    /// Cursor positions survive when the slot count is unchanged.
    pub fn sync(&mut self, roster: &Roster, theme: &Theme) {
        if self.inputs.len() == roster.len() {
            for (input, name) in self.inputs.iter_mut().zip(roster.names()) {
                if input.value() != name {
                    input.set_value(name.as_str());
                }
            }
        } else {
            self.inputs = roster
                .names()
                .iter()
                .enumerate()
                .map(|(i, name)| {
                    let mut input =
                        TextInput::new(format!(" Player {} ", i + 1)).placeholder("Name");
                    input.set_value(name.as_str());
                    input
                })
                .collect();
        }

        let muted = theme.dimmed_style.fg.unwrap_or(Color::DarkGray);
        for (i, input) in self.inputs.iter_mut().enumerate() {
            input.set_colors(theme.player_color(i), muted);
        }
        self.focus_slot(self.focus);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> SetupAction {
        match resolve(&self.bindings, &key) {
            Some(Action::StartGame) => return SetupAction::StartGame,
            Some(Action::AddPlayer) => return SetupAction::AddPlayer,
            Some(Action::RemovePlayer) => return SetupAction::RemovePlayer(self.focus),
            Some(Action::ToggleTheme) => return SetupAction::ToggleTheme,
            Some(Action::Quit) => return SetupAction::Quit,
            Some(Action::FocusNext) => {
                if !self.inputs.is_empty() {
                    self.focus_slot((self.focus + 1) % self.inputs.len());
                }
                return SetupAction::None;
            }
            Some(Action::FocusPrevious) => {
                if !self.inputs.is_empty() {
                    let len = self.inputs.len();
                    self.focus_slot((self.focus + len - 1) % len);
                }
                return SetupAction::None;
            }
            _ => {}
        }

        let focus = self.focus;
        let Some(input) = self.inputs.get_mut(focus) else {
            return SetupAction::None;
        };
        if input.handle_key(&key) {
            SetupAction::Rename {
                index: focus,
                name: input.value().to_string(),
            }
        } else {
            SetupAction::None
        }
    }

    /// First slot shown when only `visible` slots fit.
    fn scroll_start(&self, visible: usize) -> usize {
        if visible == 0 || self.focus < visible {
            0
        } else {
            self.focus + 1 - visible
        }
    }

    fn render_slots(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let visible = usize::from(area.height / SLOT_HEIGHT);
        let start = self.scroll_start(visible);

        for (row, (i, input)) in self
            .inputs
            .iter()
            .enumerate()
            .skip(start)
            .take(visible)
            .enumerate()
        {
            let y = area.y + u16::try_from(row).unwrap_or(0) * SLOT_HEIGHT;
            let [swatch, field] =
                Layout::horizontal([Constraint::Length(3), Constraint::Fill(1)])
                    .areas(Rect::new(area.x, y, area.width, SLOT_HEIGHT));

            let marker = if i == self.focus { "▶" } else { "●" };
            buf.set_string(swatch.x + 1, swatch.y + 1, marker, theme.player_style(i));
            input.render(field, buf);
        }

        if start > 0 {
            buf.set_string(area.right().saturating_sub(2), area.y, "▲", theme.dimmed_style);
        }
        if start + visible < self.inputs.len() && area.height > 0 {
            buf.set_string(
                area.right().saturating_sub(2),
                area.bottom() - 1,
                "▼",
                theme.dimmed_style,
            );
        }
    }

    fn render_status(
        roster: &Roster,
        bounds: RosterBounds,
        area: Rect,
        buf: &mut Buffer,
        theme: &Theme,
    ) {
        let filled = roster.filled_count();
        let mut spans = vec![Span::styled(
            format!("{filled} named · {}–{} players", bounds.min(), bounds.max()),
            theme.dimmed_style,
        )];
        if !roster.can_add(bounds) {
            spans.push(Span::styled("  · roster full", theme.dimmed_style));
        }
        if !roster.can_remove(bounds) {
            spans.push(Span::styled("  · minimum reached", theme.dimmed_style));
        }
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(area, buf);
    }

    fn render_start_button(ready: bool, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let (label, style) = if ready {
            (
                "Start game  ⏎",
                Style::default()
                    .bg(theme.accent)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("Start game", theme.dimmed_style.add_modifier(Modifier::DIM))
        };

        let button = centered_column(24, area);
        Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(if ready { theme.border_style } else { theme.dimmed_style }),
            )
            .render(button, buf);
    }

    pub fn render(
        &self,
        area: Rect,
        buf: &mut Buffer,
        roster: &Roster,
        bounds: RosterBounds,
        theme: &Theme,
    ) {
        let [header, _, intro, slots, status, start, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(area);

        HeaderBar::new(crate::NAME, crate::VERSION)
            .variant(theme.variant)
            .style(HeaderBarStyle::from_theme(theme))
            .render(header, buf);

        Paragraph::new(vec![
            Line::styled("Who's playing?", theme.title_style),
            Line::styled(
                "Everyone answers the same question. One of you secretly gets a different one.",
                theme.dimmed_style,
            ),
        ])
        .alignment(Alignment::Center)
        .render(centered_column(COLUMN_WIDTH + 24, intro), buf);

        self.render_slots(centered_column(COLUMN_WIDTH, slots), buf, theme);
        Self::render_status(roster, bounds, status, buf, theme);
        Self::render_start_button(roster.is_ready(bounds), start, buf, theme);

        FooterBar::new(&self.bindings)
            .page("Setup")
            .style(FooterBarStyle::from_theme(theme))
            .render(footer, buf);
    }
}
