//! Game rule error types.

use thiserror::Error;

/// Game rule violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum GameError {
    #[error("need between {min} and {max} named players, found {filled}")]
    RosterNotReady { filled: usize, min: usize, max: usize },

    #[error("unsupported player bounds {min}..={max}")]
    InvalidBounds { min: usize, max: usize },

    #[error("question catalog is empty")]
    EmptyCatalog,

    #[error("a game can only start from the setup screen")]
    NotInSetup,
}

impl GameError {
    /// Returns whether the player can fix the problem from the setup screen.
    #[must_use]
    pub const fn is_user_fixable(&self) -> bool {
        matches!(self, Self::RosterNotReady { .. })
    }
}
