//! virion-locale
//!
//! Per-player localization for game-server plugins: loads per-locale lang files at
//! startup, tracks the locale each connected player negotiated, and resolves
//! message identifiers to formatted, placeholder-substituted text with fallback.

pub mod config;
pub mod error;
pub mod input;
pub mod ir;
pub mod locale;
pub mod session;
pub mod store;
pub mod text;
pub mod types;

mod test_utils;

pub use error::LocaleError;
pub use locale::{
    BootstrapError,
    Locale,
    MessageSink,
    Requester,
};
pub use store::TranslationStore;
pub use text::Substitutions;
pub use types::LocaleIdentifier;
