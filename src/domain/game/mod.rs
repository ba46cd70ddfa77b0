//! Game session state and the transitions between screens.

mod page;
mod state;
mod transition;

pub use page::Page;
pub use state::{GameState, Round};
pub use transition::{GameAction, transition};
