mod event_bus;
mod location_provider;
mod navigation_dispatcher;

pub use event_bus::{HostEventBus, Subscription};
pub use location_provider::LocationProvider;
pub use navigation_dispatcher::NavigationDispatcher;

#[cfg(test)]
pub mod mocks {
    pub use super::location_provider::MockLocationProvider;
    pub use super::navigation_dispatcher::MockNavigationDispatcher;
}
