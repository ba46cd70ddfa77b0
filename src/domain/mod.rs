//! Domain layer with game rules, entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Session state and transitions.
pub mod game;
/// Keybinding definitions.
pub mod keybinding;
/// Transient user-facing messages.
pub mod notification;
/// Port definitions.
pub mod ports;

pub use entities::{QuestionCatalog, QuestionPair, Role, Roster, RosterBounds};
pub use errors::{GameError, StorageError};
pub use game::{GameAction, GameState, Page, transition};
pub use notification::{Notification, NotificationLevel};
pub use ports::RosterStoragePort;
