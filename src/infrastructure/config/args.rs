use super::app_config::{BarPosition, LogLevel};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "urlbar",
    version,
    about = "A navigation bar with history and deep-link input for Discord",
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

    /// Enable mouse support.
    #[arg(long)]
    pub mouse: Option<bool>,

    /// Position of the navigation bar.
    #[arg(long, value_enum)]
    pub position: Option<BarPosition>,

    /// Show navigation history buttons.
    #[arg(long)]
    pub show_history: Option<bool>,

    /// Show refresh button.
    #[arg(long)]
    pub show_refresh: Option<bool>,

    /// Show home button.
    #[arg(long)]
    pub show_home: Option<bool>,

    /// Maximum height of the navigation bar in pixels (30 to 60).
    #[arg(long, value_name = "PX")]
    pub max_height: Option<u16>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,
}
