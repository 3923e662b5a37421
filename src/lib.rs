//! urlbar - A navigation bar for terminal Discord clients.
//!
//! This crate provides a browser-style address bar with clean architecture:
//! it tracks the client's current location, keeps a bounded back/forward
//! history and follows deep links typed by the user or picked from
//! suggestions.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing services and use cases.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing configuration and host adapters.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "urlbar";
