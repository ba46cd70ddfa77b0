use super::app_config::{LogLevel, ThemeMode};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "impostor",
    version,
    about = "A pass-the-device social deduction question game",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Largest group allowed (3 to 10).
    #[arg(long, value_name = "N")]
    pub max_players: Option<usize>,

    /// Custom question catalog (TOML).
    #[arg(short, long, value_name = "PATH")]
    pub questions: Option<PathBuf>,

    /// Do not remember player names between sessions.
    #[arg(long)]
    pub no_persist: bool,

    /// Forget the saved player names before starting.
    #[arg(long)]
    pub forget_players: bool,

    /// Theme mode.
    #[arg(long, value_enum)]
    pub theme: Option<ThemeMode>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,

    /// Delay after revealing a card before an answer can be submitted.
    #[arg(long, value_name = "MS")]
    pub reveal_delay_ms: Option<u64>,

    /// Enable `TachyonFX` animations.
    #[arg(long)]
    pub enable_animations: Option<bool>,
}
