//! Session-scoped state: lifecycle signals and the locale each requester negotiated.

pub mod lifecycle;
pub mod tracker;

pub use lifecycle::{
    SessionDispatcher,
    SessionLifecycle,
    SessionListener,
};
pub use tracker::LocaleTracker;
