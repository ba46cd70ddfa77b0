//! Application layer with the game store and UI-facing services.

/// Application services.
pub mod services;

pub use services::{GameStore, NotificationManager};
