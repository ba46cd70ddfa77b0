//! Impostor - a pass-the-device party game for the terminal.
//!
//! Players take turns answering a shared question on one device while one of
//! them secretly answers a different one. The group then reads every answer
//! and tries to spot the impostor.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the game store and notifications.
pub mod application;
/// Domain layer containing entities, game rules, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing configuration, catalogs and roster storage.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "impostor";
