//! Domain layer with core entities, navigation vocabulary and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Host notifications.
pub mod events;
/// Keybinding definitions.
pub mod keybinding;
/// Canonical links and navigation intents.
pub mod navigation;
/// Port definitions.
pub mod ports;

pub use entities::{HistoryEntry, Location};
pub use errors::{HostError, NavigationError};
pub use events::{HostEvent, HostEventKind};
pub use navigation::NavigationIntent;
pub use ports::{HostEventBus, LocationProvider, NavigationDispatcher, Subscription};
