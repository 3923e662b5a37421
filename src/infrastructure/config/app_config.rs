//! Application configuration.

use super::args::CliArgs;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub(crate) const APP_NAME: &str = "urlbar";
pub(crate) const APP_QUALIFIER: &str = "com";
pub(crate) const APP_ORGANIZATION: &str = "linuxmobile";

/// Smallest bar height accepted, in pixels.
pub const MIN_BAR_HEIGHT: u16 = 30;
/// Largest bar height accepted, in pixels.
pub const MAX_BAR_HEIGHT: u16 = 60;

/// Verbosity used when `RUST_LOG` is not set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Directive understood by `tracing_subscriber::EnvFilter`.
    #[must_use]
    pub const fn as_directive(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_directive())
    }
}

/// Where the navigation bar is placed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BarPosition {
    /// Full width, above the content.
    #[default]
    Top,
    /// Full width, below the content.
    Bottom,
    /// Centered over the content.
    Floating,
}

/// Navigation bar configuration. Read by the bar, never computed by it.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarConfig {
    /// Bar placement.
    #[serde(default)]
    pub position: BarPosition,

    /// Show the back and forward buttons.
    #[serde(default = "default_true")]
    pub show_history: bool,

    /// Show the refresh button.
    #[serde(default = "default_true")]
    pub show_refresh: bool,

    /// Show the home button.
    #[serde(default = "default_true")]
    pub show_home: bool,

    /// Maximum bar height in pixels (30 to 60).
    #[serde(default = "default_max_height")]
    pub max_height: u16,
}

impl BarConfig {
    /// Bar height clamped to the supported range.
    #[must_use]
    pub fn clamped_height(&self) -> u16 {
        self.max_height.clamp(MIN_BAR_HEIGHT, MAX_BAR_HEIGHT)
    }

    /// Terminal rows the bar occupies: one row per 10 px, at least 3 so the
    /// bordered input fits.
    #[must_use]
    pub fn rows(&self) -> u16 {
        (self.clamped_height() / 10).max(3)
    }
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            position: BarPosition::Top,
            show_history: true,
            show_refresh: true,
            show_home: true,
            max_height: default_max_height(),
        }
    }
}

/// Theme configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Accent color (name or hex code).
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent_color: default_accent_color(),
        }
    }
}

/// Everything read from `config.toml`, after command line overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Only settable from the command line.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    #[serde(default)]
    pub log_level: LogLevel,

    #[serde(default = "default_true")]
    pub mouse: bool,

    #[serde(default)]
    pub bar: BarConfig,

    #[serde(default)]
    pub theme: ThemeConfig,
}

fn default_accent_color() -> String {
    "#7289da".to_string()
}

const fn default_max_height() -> u16 {
    40
}

const fn default_true() -> bool {
    true
}

fn override_with<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

impl AppConfig {
    /// Applies every option given on the command line over the file values.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if args.log_path.is_some() {
            self.log_path = args.log_path;
        }
        override_with(&mut self.log_level, args.log_level);
        override_with(&mut self.mouse, args.mouse);
        override_with(&mut self.theme.accent_color, args.accent_color);

        let bar = &mut self.bar;
        override_with(&mut bar.position, args.position);
        override_with(&mut bar.show_history, args.show_history);
        override_with(&mut bar.show_refresh, args.show_refresh);
        override_with(&mut bar.show_home, args.show_home);
        override_with(&mut bar.max_height, args.max_height);
    }

    /// `urlbar.log` in the platform data directory.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("urlbar.log"))
    }

    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: None,
            log_level: LogLevel::Info,
            mouse: true,
            bar: BarConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use test_case::test_case;

    #[test]
    fn test_parse_bar_config() {
        let toml_content = r#"
            log_level = "debug"

            [bar]
            position = "floating"
            show_refresh = false
            max_height = 50
        "#;

        let config: AppConfig = toml::from_str(toml_content).unwrap();

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.bar.position, BarPosition::Floating);
        assert!(config.bar.show_history);
        assert!(!config.bar.show_refresh);
        assert!(config.bar.show_home);
        assert_eq!(config.bar.max_height, 50);
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.bar, BarConfig::default());
        assert_eq!(config.bar.position, BarPosition::Top);
        assert_eq!(config.bar.max_height, 40);
        assert!(config.mouse);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();

        assert_eq!(config.bar, BarConfig::default());
        assert_eq!(config.theme, ThemeConfig::default());
    }

    #[test_case(10, 30, 3 ; "below_range")]
    #[test_case(30, 30, 3 ; "minimum")]
    #[test_case(45, 45, 4 ; "between_markers")]
    #[test_case(60, 60, 6 ; "maximum")]
    #[test_case(200, 60, 6 ; "above_range")]
    fn test_bar_height_clamping(max_height: u16, clamped: u16, rows: u16) {
        let bar = BarConfig {
            max_height,
            ..BarConfig::default()
        };

        assert_eq!(bar.clamped_height(), clamped);
        assert_eq!(bar.rows(), rows);
    }

    #[test_case(LogLevel::Warn, "warn" ; "warn")]
    #[test_case(LogLevel::Trace, "trace" ; "trace")]
    fn test_log_level_directive(level: LogLevel, directive: &str) {
        assert_eq!(level.to_string(), directive);
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut config = AppConfig::default();
        let args = CliArgs::parse_from([
            "urlbar",
            "--position",
            "bottom",
            "--show-home",
            "false",
            "--max-height",
            "60",
        ]);

        config.merge_with_args(args);

        assert_eq!(config.bar.position, BarPosition::Bottom);
        assert!(!config.bar.show_home);
        assert!(config.bar.show_history);
        assert_eq!(config.bar.max_height, 60);
        assert_eq!(config.log_level, LogLevel::Info);
    }
}
