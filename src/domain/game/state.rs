//! Session state record.

use super::Page;
use crate::domain::entities::{QuestionPair, Role, Roster};

/// Everything that exists only while a round is being played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub(super) pair: QuestionPair,
    pub(super) impostor: usize,
    pub(super) answers: Vec<String>,
}

impl Round {
    /// The drawn question pair.
    #[must_use]
    pub fn pair(&self) -> &QuestionPair {
        &self.pair
    }

    /// Roster index of the impostor.
    #[must_use]
    pub const fn impostor(&self) -> usize {
        self.impostor
    }

    /// Answers, index-aligned with the roster.
    #[must_use]
    pub fn answers(&self) -> &[String] {
        &self.answers
    }
}

/// Canonical state of one game session.
///
/// Fields are only changed through [`super::transition`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameState {
    pub(super) roster: Roster,
    pub(super) round: Option<Round>,
    pub(super) page: Page,
    pub(super) current_player: usize,
}

impl GameState {
    /// Creates a session on the setup page.
    #[must_use]
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            round: None,
            page: Page::Setup,
            current_player: 0,
        }
    }

    /// The player roster.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The active page.
    #[must_use]
    pub const fn page(&self) -> Page {
        self.page
    }

    /// The round in progress, if any.
    #[must_use]
    pub const fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// The drawn question pair, if a round is in progress.
    #[must_use]
    pub fn question_pair(&self) -> Option<&QuestionPair> {
        self.round.as_ref().map(Round::pair)
    }

    /// Answers collected so far; empty outside a round.
    #[must_use]
    pub fn answers(&self) -> &[String] {
        self.round.as_ref().map_or(&[][..], Round::answers)
    }

    /// Index of the player whose turn it is on the cards page.
    #[must_use]
    pub const fn current_player_index(&self) -> usize {
        self.current_player
    }

    /// Whether the current player is the last one to answer.
    #[must_use]
    pub fn is_last_turn(&self) -> bool {
        self.current_player + 1 >= self.roster.len()
    }

    /// Roster index of the impostor.
    #[must_use]
    pub fn impostor_index(&self) -> Option<usize> {
        self.round.as_ref().map(Round::impostor)
    }

    /// Name of the impostor.
    #[must_use]
    pub fn impostor_name(&self) -> Option<&str> {
        self.impostor_index().and_then(|i| self.roster.name(i))
    }

    /// The impostor's recorded answer.
    #[must_use]
    pub fn impostor_answer(&self) -> Option<&str> {
        let round = self.round.as_ref()?;
        round.answers.get(round.impostor).map(String::as_str)
    }

    /// Role of the player at `index` in the current round.
    #[must_use]
    pub fn role_of(&self, index: usize) -> Option<Role> {
        let round = self.round.as_ref()?;
        if index >= self.roster.len() {
            return None;
        }
        Some(if index == round.impostor {
            Role::Impostor
        } else {
            Role::Crew
        })
    }

    /// Question the player at `index` receives.
    #[must_use]
    pub fn question_for(&self, index: usize) -> Option<&str> {
        let role = self.role_of(index)?;
        self.question_pair().map(|pair| pair.for_role(role))
    }

    /// Names paired with their answers, in roster order.
    pub fn answer_sheet(&self) -> impl Iterator<Item = (&str, &str)> {
        self.roster
            .names()
            .iter()
            .map(String::as_str)
            .zip(self.answers().iter().map(String::as_str))
    }
}
