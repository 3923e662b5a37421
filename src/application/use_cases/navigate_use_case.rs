//! Navigation use case.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::services::LocationResolver;
use crate::domain::errors::NavigationError;
use crate::domain::navigation::NavigationIntent;
use crate::domain::ports::NavigationDispatcher;

/// Follows a link typed or picked by the user.
pub struct NavigateUseCase {
    dispatcher: Arc<dyn NavigationDispatcher>,
}

impl NavigateUseCase {
    /// Creates new use case.
    #[must_use]
    pub const fn new(dispatcher: Arc<dyn NavigationDispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Parses `link` and hands the resulting intent to the host.
    ///
    /// Same-domain links with no navigation attached are accepted without
    /// dispatching anything. Links on other domains are opened externally.
    ///
    /// # Errors
    /// Returns `NavigationError` if the link is malformed or the host refuses
    /// the navigation. Nothing is dispatched in either case.
    pub fn execute(&self, link: &str) -> Result<NavigationIntent, NavigationError> {
        let intent = LocationResolver::parse(link).inspect_err(|e| {
            warn!(error = %e, input = link, "Rejected navigation input");
        })?;

        match &intent {
            NavigationIntent::OpenExternal { url } => {
                info!(url = %url, "Opening link externally");
                self.dispatcher.open_external(url)?;
            }
            NavigationIntent::None => {
                debug!(link, "Link accepted without navigation");
            }
            intent => {
                debug!(?intent, "Dispatching navigation");
                self.dispatcher.dispatch(intent).inspect_err(|e| {
                    warn!(error = %e, ?intent, "Host refused navigation");
                })?;
            }
        }

        Ok(intent)
    }
}
