use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use impostor::application::services::GameStore;
use impostor::domain::RosterStoragePort;
use impostor::infrastructure::{
    AppConfig, CliArgs, FileRosterStorage, MemoryRosterStorage, StorageManager, resolve_catalog,
};
use impostor::presentation::theme::{Theme, detect_variant};
use impostor::presentation::{App, AppOptions};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    }

    Ok(())
}

fn create_roster_storage(
    config: &AppConfig,
    storage_manager: &StorageManager,
) -> Arc<dyn RosterStoragePort> {
    if !config.game.persist_roster {
        info!("Roster persistence disabled");
        return Arc::new(MemoryRosterStorage::new());
    }

    let path = config
        .game
        .roster_path
        .clone()
        .unwrap_or_else(|| storage_manager.default_roster_path());
    let storage = FileRosterStorage::new(path);
    info!(path = %storage.path().display(), "Roster file");
    Arc::new(storage)
}

fn create_app() -> Result<App> {
    let args = CliArgs::parse();
    let forget_players = args.forget_players;

    let storage_manager = StorageManager::new()?;
    let mut config = storage_manager.load_config(args.config.as_deref())?;
    config.merge_with_args(args);

    init_logging(&config)?;

    info!(version = impostor::VERSION, "Starting Impostor");

    let bounds = config.game.bounds();
    let catalog = resolve_catalog(config.game.questions_path.as_deref());
    let roster_storage = create_roster_storage(&config, &storage_manager);

    if forget_players && let Err(e) = roster_storage.clear_roster() {
        warn!(error = %e, "Failed to forget saved players");
    }

    let store = GameStore::initialize(roster_storage, catalog, bounds);
    let theme = Theme::new(
        &config.theme.accent_color,
        detect_variant(config.theme.mode),
    );
    let options = AppOptions {
        reveal_delay: config.game.reveal_delay(),
        enable_animations: config.ui.enable_animations,
        notification_duration: config.notification_duration(),
    };

    Ok(App::new(store, theme, options))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let app = create_app()?;

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal).await;

    ratatui::restore();

    result
}
