//! Application layer with navigation services and use cases.

/// Stateful services behind the navigation bar.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use services::{HistoryController, LocationResolver, SuggestionService};
pub use use_cases::NavigateUseCase;
