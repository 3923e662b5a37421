//! Infrastructure layer with configuration and host adapters.

/// Application configuration.
pub mod config;
/// Host client adapters.
pub mod host;

pub use config::{AppConfig, BarConfig, BarPosition, CliArgs, LogLevel, StorageManager};
pub use host::InMemoryHost;
