//! Infrastructure layer with storage, configuration and data adapters.

/// Question catalog sources.
pub mod catalog;
/// Application configuration.
pub mod config;
/// Roster persistence.
pub mod roster_store;

pub use catalog::{CatalogError, builtin_catalog, load_catalog, resolve_catalog};
pub use config::{AppConfig, CliArgs, ConfigError, LogLevel, StorageManager, ThemeMode};
pub use roster_store::{FileRosterStorage, MemoryRosterStorage};
