pub mod history_controller;
pub mod location_resolver;
pub mod suggestion_service;

pub use history_controller::{HISTORY_CAPACITY, HistoryController};
pub use location_resolver::LocationResolver;
pub use suggestion_service::{SuggestionService, SuggestionState, suggest};
