//! Session lifecycle signals.
//!
//! The host owns connections; it reports locale negotiation and disconnects
//! through these traits. Dispatch is synchronous.

use std::fmt;
use std::sync::Arc;

/// Receives session signals from the host.
pub trait SessionListener: Send + Sync {
    /// A requester finished its handshake and reported `locale`.
    fn on_connect(&self, identity: &str, locale: &str);

    /// The requester's session ended.
    fn on_disconnect(&self, identity: &str);
}

/// Host-side registration point for [`SessionListener`]s.
pub trait SessionLifecycle {
    fn register(&mut self, listener: Arc<dyn SessionListener>);
}

/// In-process [`SessionLifecycle`] that fans signals out to every listener in
/// registration order.
#[derive(Default, Clone)]
pub struct SessionDispatcher {
    listeners: Vec<Arc<dyn SessionListener>>,
}

impl SessionDispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn connect(&self, identity: &str, locale: &str) {
        tracing::debug!(identity, locale, "Session connected");
        for listener in &self.listeners {
            listener.on_connect(identity, locale);
        }
    }

    pub fn disconnect(&self, identity: &str) {
        tracing::debug!(identity, "Session disconnected");
        for listener in &self.listeners {
            listener.on_disconnect(identity);
        }
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl SessionLifecycle for SessionDispatcher {
    fn register(&mut self, listener: Arc<dyn SessionListener>) {
        self.listeners.push(listener);
    }
}

impl fmt::Debug for SessionDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionDispatcher")
            .field("listeners", &format_args!("<{} listeners>", self.listeners.len()))
            .finish()
    }
}
