//! Domain entities.

mod question;
mod roster;

pub use question::{QuestionCatalog, QuestionPair, Role};
pub use roster::{MAX_PLAYERS, MIN_PLAYERS, Roster, RosterBounds};
