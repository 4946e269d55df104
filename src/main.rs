//! Rival Lens - Desktop competitor analysis walkthrough.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use rival_lens as app;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use app::config::{AppConfig, ConfigLoadResult};
use app::logging;
use app::ui::RivalLensApp;

/// Desktop competitor analysis walkthrough.
#[derive(Parser)]
#[command(name = "rival-lens", version)]
struct Cli {
    /// Use config.toml from current directory (dev mode)
    #[arg(long)]
    dev: bool,

    /// Load configuration from this file
    #[arg(long, value_name = "PATH", conflicts_with = "dev")]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _guard = init_logging(cli.debug).context("Failed to initialize logging")?;

    tracing::info!("Rival Lens starting...");

    // Determine config path based on mode
    let config_path = if let Some(path) = cli.config {
        path
    } else if cli.dev {
        tracing::info!("Dev mode: loading config from current directory");
        PathBuf::from("config.toml")
    } else {
        AppConfig::default_path()
    };
    tracing::info!("Config path: {:?}", config_path);

    let (config, initial_error) = match AppConfig::try_load(&config_path) {
        ConfigLoadResult::Loaded(config) => {
            tracing::info!("Config loaded successfully");
            (config, None)
        }
        ConfigLoadResult::Missing => {
            tracing::info!("Config missing, writing defaults");
            let config = AppConfig::default();
            if let Err(e) = config.save(&config_path) {
                tracing::warn!("Failed to write default config: {}", e);
            }
            (config, None)
        }
        ConfigLoadResult::Invalid(e) => {
            tracing::warn!("Config invalid: {}", e);
            (
                AppConfig::default(),
                Some(format!("{}\n\nUsing default settings for this session.", e)),
            )
        }
    };

    run_app(config, config_path, initial_error)
}

/// Console output plus a daily rolling file in the platform data directory.
///
/// An unusable log directory only disables the file output.
fn init_logging(debug: bool) -> anyhow::Result<Option<WorkerGuard>> {
    let level = if debug { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let log_dir = AppConfig::log_dir();
    let (file_layer, guard, file_error) = match logging::open_log_file(&log_dir) {
        Ok(appender) => {
            let (file_writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer().with_ansi(false).with_writer(file_writer);
            (Some(layer), Some(guard), None)
        }
        Err(e) => (None, None, Some(e)),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(file_layer)
        .try_init()
        .context("Global subscriber already set")?;

    if let Some(e) = file_error {
        tracing::warn!("File logging disabled ({}): {}", log_dir.display(), e);
    }

    Ok(guard)
}

/// Run the main application.
fn run_app(config: AppConfig, config_path: PathBuf, initial_error: Option<String>) -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Rival Lens")
            .with_inner_size([config.ui.window_width, config.ui.window_height])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    // Create tokio runtime for async operations
    let rt = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;

    eframe::run_native(
        "Rival Lens",
        options,
        Box::new(|cc| Ok(Box::new(RivalLensApp::new(cc, config, config_path, rt, initial_error)))),
    )
    .map_err(|e| anyhow::anyhow!("Window error: {e}"))
}
