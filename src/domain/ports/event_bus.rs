//! Host event subscription port.

use tokio::sync::mpsc;

use crate::domain::events::{HostEvent, HostEventKind};

/// Port for registering interest in host notifications.
pub trait HostEventBus: Send + Sync {
    /// Forwards every event of the given kinds to `sender` until the returned
    /// subscription is cancelled or dropped.
    fn subscribe(
        &self,
        kinds: &[HostEventKind],
        sender: mpsc::UnboundedSender<HostEvent>,
    ) -> Subscription;
}

/// Handle for a live host subscription; deregisters on cancel or drop.
#[must_use = "dropping a subscription deregisters it immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    /// Wraps the deregistration callback of a bus implementation.
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Deregisters the handler.
    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}
