//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

use crate::domain::entities::{MAX_PLAYERS, MIN_PLAYERS, RosterBounds};

pub(crate) const APP_NAME: &str = "impostor";
pub(crate) const APP_QUALIFIER: &str = "com";
pub(crate) const APP_ORGANIZATION: &str = "linuxmobile";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, read from `config.toml` and overridden by CLI flags.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Log file path.
    #[serde(default)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Game rules.
    #[serde(default)]
    pub game: GameConfig,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,

    /// Theme configuration.
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// Game rule configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Fewest players a game accepts.
    #[serde(default = "default_min_players")]
    pub min_players: usize,

    /// Most players a game accepts.
    #[serde(default = "default_max_players")]
    pub max_players: usize,

    /// Delay between revealing a card and accepting the answer, in milliseconds.
    #[serde(default = "default_reveal_delay_ms")]
    pub reveal_delay_ms: u64,

    /// Custom question catalog (TOML).
    #[serde(default)]
    pub questions_path: Option<PathBuf>,

    /// Remember player names between sessions.
    #[serde(default = "default_true")]
    pub persist_roster: bool,

    /// Where the roster is saved; defaults to the data directory.
    #[serde(default)]
    pub roster_path: Option<PathBuf>,
}

impl GameConfig {
    /// Player bounds. Out-of-range values are clamped with a warning.
    #[must_use]
    pub fn bounds(&self) -> RosterBounds {
        RosterBounds::new(self.min_players, self.max_players).unwrap_or_else(|e| {
            warn!(error = %e, "Clamping player bounds");
            RosterBounds::clamped(self.min_players, self.max_players)
        })
    }

    /// Reveal delay as a duration.
    #[must_use]
    pub const fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_players: default_min_players(),
            max_players: default_max_players(),
            reveal_delay_ms: default_reveal_delay_ms(),
            questions_path: None,
            persist_roster: true,
            roster_path: None,
        }
    }
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Enable `TachyonFX` animations.
    #[serde(default = "default_true")]
    pub enable_animations: bool,

    /// Notification duration in seconds.
    #[serde(default = "default_notification_duration")]
    pub notification_duration: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            enable_animations: true,
            notification_duration: default_notification_duration(),
        }
    }
}

/// Theme mode configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Dark mode.
    Dark,
    /// Light mode.
    Light,
    /// Follow the terminal background (default).
    #[default]
    Auto,
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Accent color (name or hex code).
    #[serde(default = "default_accent_color")]
    pub accent_color: String,

    /// Theme mode (Dark, Light, Auto).
    #[serde(default)]
    pub mode: ThemeMode,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent_color: default_accent_color(),
            mode: ThemeMode::default(),
        }
    }
}

fn default_accent_color() -> String {
    "#9B5DE5".to_string()
}

fn default_true() -> bool {
    true
}

fn default_notification_duration() -> u64 {
    3
}

fn default_min_players() -> usize {
    MIN_PLAYERS
}

fn default_max_players() -> usize {
    MAX_PLAYERS
}

fn default_reveal_delay_ms() -> u64 {
    600
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(max_players) = args.max_players {
            self.game.max_players = max_players;
        }
        if let Some(questions) = args.questions {
            self.game.questions_path = Some(questions);
        }
        if args.no_persist {
            self.game.persist_roster = false;
        }
        if let Some(delay) = args.reveal_delay_ms {
            self.game.reveal_delay_ms = delay;
        }
        if let Some(mode) = args.theme {
            self.theme.mode = mode;
        }
        if let Some(accent_color) = args.accent_color {
            self.theme.accent_color = accent_color;
        }
        if let Some(enable_animations) = args.enable_animations {
            self.ui.enable_animations = enable_animations;
        }
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("impostor.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }

    /// Notification display time.
    #[must_use]
    pub const fn notification_duration(&self) -> Duration {
        Duration::from_secs(self.ui.notification_duration)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: None,
            log_level: LogLevel::Info,
            game: GameConfig::default(),
            ui: UiConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}
