/// The screen a session is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// Roster editing.
    #[default]
    Setup,
    /// One card per player, passed around the group.
    Cards,
    /// Everyone answered; waiting for the group before showing answers.
    RevealPrompt,
    /// All answers side by side.
    Discussion,
    /// The impostor is revealed.
    Reveal,
}

impl Page {
    /// Short heading for the page.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Setup => "Players",
            Self::Cards => "Your Card",
            Self::RevealPrompt => "Everyone Answered",
            Self::Discussion => "Discussion",
            Self::Reveal => "The Impostor Was...",
        }
    }
}
