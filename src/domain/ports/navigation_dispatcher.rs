//! Host navigation port.

use crate::domain::errors::HostError;
use crate::domain::navigation::NavigationIntent;

/// Port for handing navigation intents to the host.
#[cfg_attr(test, mockall::automock)]
pub trait NavigationDispatcher: Send + Sync {
    /// Performs an in-client navigation.
    fn dispatch(&self, intent: &NavigationIntent) -> Result<(), HostError>;

    /// Opens a link outside the client.
    fn open_external(&self, url: &str) -> Result<(), HostError>;
}
