//! Per-connection locale cache.

use dashmap::DashMap;

use super::lifecycle::SessionListener;
use crate::types::LocaleIdentifier;

/// Remembers the locale each connected requester negotiated.
///
/// Identities are compared case-insensitively. Entries live from connect to
/// disconnect and are never persisted. Safe to share between the session
/// lifecycle and request handlers.
#[derive(Debug)]
pub struct LocaleTracker {
    locales: DashMap<String, String>,
    fallback: LocaleIdentifier,
}

impl LocaleTracker {
    #[must_use]
    pub fn new(fallback: LocaleIdentifier) -> Self {
        Self { locales: DashMap::new(), fallback }
    }

    fn normalize(identity: &str) -> String {
        identity.to_lowercase()
    }

    /// Records or overwrites the locale of `identity`. Empty identities are ignored.
    pub fn track(&self, identity: &str, locale: &str) {
        if identity.is_empty() {
            return;
        }
        self.locales.insert(Self::normalize(identity), locale.to_string());
    }

    /// Forgets `identity`; unknown identities are ignored.
    pub fn forget(&self, identity: &str) {
        self.locales.remove(&Self::normalize(identity));
    }

    /// The locale `identity` reported, if it is connected.
    #[must_use]
    pub fn tracked(&self, identity: &str) -> Option<String> {
        self.locales.get(&Self::normalize(identity)).map(|entry| entry.value().clone())
    }

    /// The locale to translate for `identity`: its tracked locale or the fallback.
    #[must_use]
    pub fn resolve(&self, identity: &str) -> String {
        self.tracked(identity).unwrap_or_else(|| self.fallback.code().to_string())
    }

    #[must_use]
    pub const fn fallback(&self) -> LocaleIdentifier {
        self.fallback
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.locales.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

impl SessionListener for LocaleTracker {
    fn on_connect(&self, identity: &str, locale: &str) {
        self.track(identity, locale);
    }

    fn on_disconnect(&self, identity: &str) {
        self.forget(identity);
    }
}
