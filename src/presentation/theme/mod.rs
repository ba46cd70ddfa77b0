//! Colours and styles.

pub mod adapter;
pub mod service;

pub use service::{PLAYER_PALETTE, Theme, ThemeVariant, detect_variant};
