use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    ToggleTheme,

    // Setup
    FocusNext,
    FocusPrevious,
    AddPlayer,
    RemovePlayer,
    StartGame,

    // Cards
    RevealCard,
    SubmitAnswer,
    NewLine,
    RestartRound,
    Confirm,
    Cancel,

    // Results
    RevealAnswers,
    RevealImpostor,
    ScrollUp,
    ScrollDown,
    PlayAgain,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub key: KeyEvent,
    pub action: Action,
    pub label: Cow<'static, str>,
    pub key_display: Option<Cow<'static, str>>,
    pub visible_in_bar: bool,
}

impl Keybind {
    pub fn new(key: KeyEvent, action: Action, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key,
            action,
            label: label.into(),
            key_display: None,
            visible_in_bar: true,
        }
    }

    /// Overrides the key text shown in the footer.
    #[must_use]
    pub fn display(mut self, text: impl Into<Cow<'static, str>>) -> Self {
        self.key_display = Some(text.into());
        self
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible_in_bar = false;
        self
    }

    #[must_use]
    pub fn matches(&self, key: &KeyEvent) -> bool {
        self.key.code == key.code && self.key.modifiers == key.modifiers
    }
}

const fn plain(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

const fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Bindings active on the setup page.
#[must_use]
pub fn setup_bindings() -> Vec<Keybind> {
    vec![
        Keybind::new(plain(KeyCode::Enter), Action::StartGame, "Start"),
        Keybind::new(ctrl('n'), Action::AddPlayer, "Add"),
        Keybind::new(ctrl('d'), Action::RemovePlayer, "Remove"),
        Keybind::new(plain(KeyCode::Down), Action::FocusNext, "Next").display("↓/Tab"),
        Keybind::new(plain(KeyCode::Tab), Action::FocusNext, "Next").hidden(),
        Keybind::new(plain(KeyCode::Up), Action::FocusPrevious, "Prev").hidden(),
        Keybind::new(
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            Action::FocusPrevious,
            "Prev",
        )
        .hidden(),
        Keybind::new(ctrl('t'), Action::ToggleTheme, "Theme"),
        Keybind::new(ctrl('q'), Action::Quit, "Quit"),
    ]
}

/// Bindings active on a card before it is revealed.
#[must_use]
pub fn card_hidden_bindings() -> Vec<Keybind> {
    vec![
        Keybind::new(plain(KeyCode::Char(' ')), Action::RevealCard, "Reveal").display("Space"),
        Keybind::new(plain(KeyCode::Enter), Action::RevealCard, "Reveal").hidden(),
        Keybind::new(ctrl('r'), Action::RestartRound, "Restart round"),
        Keybind::new(ctrl('q'), Action::Quit, "Quit"),
    ]
}

/// Bindings active on a revealed card.
#[must_use]
pub fn card_revealed_bindings() -> Vec<Keybind> {
    vec![
        Keybind::new(plain(KeyCode::Enter), Action::SubmitAnswer, "Submit"),
        Keybind::new(
            KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT),
            Action::NewLine,
            "Newline",
        ),
        Keybind::new(ctrl('r'), Action::RestartRound, "Restart round"),
        Keybind::new(ctrl('q'), Action::Quit, "Quit"),
    ]
}

/// Bindings active while the restart confirmation is open.
#[must_use]
pub fn confirm_bindings() -> Vec<Keybind> {
    vec![
        Keybind::new(plain(KeyCode::Char('y')), Action::Confirm, "Restart"),
        Keybind::new(plain(KeyCode::Char('n')), Action::Cancel, "Keep playing"),
        Keybind::new(plain(KeyCode::Esc), Action::Cancel, "Keep playing").hidden(),
    ]
}

/// Bindings active on the reveal prompt.
#[must_use]
pub fn reveal_prompt_bindings() -> Vec<Keybind> {
    vec![
        Keybind::new(plain(KeyCode::Enter), Action::RevealAnswers, "Reveal answers"),
        Keybind::new(plain(KeyCode::Char(' ')), Action::RevealAnswers, "Reveal").hidden(),
        Keybind::new(ctrl('q'), Action::Quit, "Quit"),
    ]
}

/// Bindings active during the discussion.
#[must_use]
pub fn discussion_bindings() -> Vec<Keybind> {
    vec![
        Keybind::new(plain(KeyCode::Enter), Action::RevealImpostor, "Reveal impostor"),
        Keybind::new(plain(KeyCode::Up), Action::ScrollUp, "Scroll").display("↑/↓"),
        Keybind::new(plain(KeyCode::Down), Action::ScrollDown, "Scroll").hidden(),
        Keybind::new(ctrl('q'), Action::Quit, "Quit"),
    ]
}

/// Bindings active on the impostor reveal.
#[must_use]
pub fn reveal_bindings() -> Vec<Keybind> {
    vec![
        Keybind::new(plain(KeyCode::Enter), Action::PlayAgain, "Restart game"),
        Keybind::new(plain(KeyCode::Char('r')), Action::PlayAgain, "Restart").hidden(),
        Keybind::new(ctrl('q'), Action::Quit, "Quit"),
    ]
}

/// Looks up the action bound to `key`.
#[must_use]
pub fn resolve(bindings: &[Keybind], key: &KeyEvent) -> Option<Action> {
    bindings.iter().find(|b| b.matches(key)).map(|b| b.action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_setup_keys() {
        let bindings = setup_bindings();
        assert_eq!(
            resolve(&bindings, &plain(KeyCode::Enter)),
            Some(Action::StartGame)
        );
        assert_eq!(resolve(&bindings, &ctrl('n')), Some(Action::AddPlayer));
        assert_eq!(resolve(&bindings, &plain(KeyCode::Char('n'))), None);
    }

    #[test]
    fn test_modifiers_must_match_exactly() {
        let bindings = card_revealed_bindings();
        assert_eq!(
            resolve(&bindings, &plain(KeyCode::Enter)),
            Some(Action::SubmitAnswer)
        );
        assert_eq!(
            resolve(
                &bindings,
                &KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT)
            ),
            Some(Action::NewLine)
        );
    }
}
