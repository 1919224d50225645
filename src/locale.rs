//! The localization context a plugin builds at startup and threads through its handlers.

use std::path::Path;
use std::sync::{
    Arc,
    OnceLock,
};

use thiserror::Error;

use crate::config::{
    LocaleSettings,
    SettingsError,
};
use crate::error::LocaleError;
use crate::input::{
    DiscoveryError,
    FileLoader,
    LangSource,
    StructuredLoader,
    find_lang_files,
};
use crate::session::{
    LocaleTracker,
    SessionLifecycle,
};
use crate::store::TranslationStore;
use crate::text::Substitutions;
use crate::types::LocaleIdentifier;

static GLOBAL: OnceLock<Locale> = OnceLock::new();

/// Who a message is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requester<'a> {
    /// A connected player, identified by name.
    Player { name: &'a str },
    /// Console or another caller without a session; always gets the fallback.
    Console,
}

/// Delivers final text to a requester. Implemented by the host.
pub trait MessageSink {
    fn send_message(&self, recipient: &Requester<'_>, text: &str);
}

/// Failures of the one-call bootstrap from a data folder.
#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error(transparent)]
    Locale(#[from] LocaleError),
}

/// Loaded translations plus the live locale of each connected player.
#[derive(Debug)]
pub struct Locale {
    store: TranslationStore,
    tracker: Arc<LocaleTracker>,
}

impl Locale {
    /// Builds a context from lang files the caller already loaded.
    ///
    /// `settings` are used as given; see [`LocaleSettings::validate`].
    pub fn from_sources(
        settings: &LocaleSettings,
        sources: impl IntoIterator<Item = LangSource>,
    ) -> Result<Self, LocaleError> {
        let mut store =
            TranslationStore::new(settings.key_separator.clone(), settings.markup_prefix);
        store.initialize(&settings.fallback_identifier, sources)?;
        let tracker = Arc::new(LocaleTracker::new(store.fallback()));
        Ok(Self { store, tracker })
    }

    /// Validates `settings`, then discovers the lang files of `data_folder` and loads
    /// them with `loader`.
    pub fn load(
        data_folder: &Path,
        settings: &LocaleSettings,
        loader: &dyn StructuredLoader,
    ) -> Result<Self, BootstrapError> {
        settings.validate().map_err(SettingsError::ValidationErrors)?;

        let lang_dir = data_folder.join(&settings.lang_directory);
        let files = find_lang_files(&lang_dir, &settings.file_patterns)?;
        tracing::debug!(lang_dir = %lang_dir.display(), files = files.len(), "Loading lang files");

        let sources = files.iter().map(|path| LangSource::load(loader, path));
        Ok(Self::from_sources(settings, sources)?)
    }

    /// Reads `locale.json` (or defaults) from `data_folder`, then loads its lang files
    /// from disk.
    pub fn load_default(data_folder: &Path) -> Result<Self, BootstrapError> {
        let settings = LocaleSettings::load(data_folder)?;
        Self::load(data_folder, &settings, &FileLoader)
    }

    #[must_use]
    pub const fn store(&self) -> &TranslationStore {
        &self.store
    }

    /// Shared handle to the tracker, for hosts wiring their own session events.
    #[must_use]
    pub fn tracker(&self) -> Arc<LocaleTracker> {
        Arc::clone(&self.tracker)
    }

    #[must_use]
    pub const fn fallback(&self) -> LocaleIdentifier {
        self.store.fallback()
    }

    /// Subscribes the tracker to the host's session signals.
    pub fn attach(&self, lifecycle: &mut impl SessionLifecycle) {
        lifecycle.register(self.tracker());
    }

    /// The locale to translate for `requester`.
    #[must_use]
    pub fn locale_for(&self, requester: &Requester<'_>) -> String {
        match requester {
            Requester::Player { name } => self.tracker.resolve(name),
            Requester::Console => self.fallback().code().to_string(),
        }
    }

    /// See [`TranslationStore::get_translation`].
    #[must_use]
    pub fn get_translation(
        &self,
        locale: &str,
        message_id: &str,
        substitutions: &Substitutions,
    ) -> String {
        self.store.get_translation(locale, message_id, substitutions)
    }

    /// Translates `message_id` into `requester`'s locale.
    #[must_use]
    pub fn translate(
        &self,
        requester: &Requester<'_>,
        message_id: &str,
        substitutions: &Substitutions,
    ) -> String {
        self.get_translation(&self.locale_for(requester), message_id, substitutions)
    }

    /// Translates `message_id` for `requester` and hands it to `sink`.
    pub fn send_translated_message(
        &self,
        sink: &dyn MessageSink,
        requester: &Requester<'_>,
        message_id: &str,
        substitutions: &Substitutions,
    ) {
        let text = self.translate(requester, message_id, substitutions);
        sink.send_message(requester, &text);
    }

    /// Installs `self` as the process-wide context, reachable through [`Locale::global`].
    ///
    /// Only the first call succeeds; later calls hand their context back.
    pub fn install_global(self) -> Result<(), Self> {
        GLOBAL.set(self)
    }

    /// The process-wide context, if one was installed.
    #[must_use]
    pub fn global() -> Option<&'static Self> {
        GLOBAL.get()
    }
}
