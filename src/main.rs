use clap::Parser;
use color_eyre::eyre::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use urlbar::infrastructure::{AppConfig, CliArgs, InMemoryHost, StorageManager};
use urlbar::presentation::App;

/// Logs go to a file: the terminal belongs to the UI while the app runs.
fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_directive()));
    let registry = tracing_subscriber::registry().with(filter);

    let Some(log_path) = config.effective_log_path() else {
        registry.init();
        return Ok(());
    };

    if let Some(dir) = log_path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    registry
        .with(fmt::layer().with_writer(file).with_ansi(false))
        .init();

    info!(path = %log_path.display(), "Logging to file");
    Ok(())
}

fn load_config() -> Result<AppConfig> {
    let args = CliArgs::parse();
    let storage = StorageManager::new()?;
    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);
    Ok(config)
}

fn create_app() -> Result<(App, bool)> {
    let config = load_config()?;

    init_logging(&config)?;

    info!(
        version = urlbar::VERSION,
        position = ?config.bar.position,
        "Starting {}",
        urlbar::NAME
    );

    let host = InMemoryHost::demo().with_system_opener();
    let app = App::new(&config, host);

    Ok((app, config.mouse))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let (app, mouse) = create_app()?;

    let mut terminal = ratatui::init();
    if mouse {
        execute!(std::io::stdout(), EnableMouseCapture)?;
    }

    let result = app.run(&mut terminal).await;

    ratatui::restore();
    if mouse {
        execute!(std::io::stdout(), DisableMouseCapture)?;
    }

    result
}
