//! Errors raised while bootstrapping translations.

use thiserror::Error;

/// Fatal initialization failures.
///
/// Lookups never produce these; only building a translation table does.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    /// The requested fallback is not one of the supported identifiers.
    #[error("Invalid Locale: Locale {0} is invalid.")]
    InvalidLocaleIdentifier(String),

    /// A lang file is malformed, or the fallback locale ended up without data.
    #[error("Config Problem: {0}")]
    Config(String),
}

impl LocaleError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
