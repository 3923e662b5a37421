//! Domain error types.

mod host_error;
mod navigation_error;

pub use host_error::HostError;
pub use navigation_error::NavigationError;
