//! Domain error types.

mod game_error;
mod storage_error;

pub use game_error::GameError;
pub use storage_error::StorageError;
