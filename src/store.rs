//! Translation table with fallback lookup.

use std::collections::HashMap;

use serde_json::Value;

use crate::error::LocaleError;
use crate::input::{
    IDENTIFIER_KEY,
    LangSource,
};
use crate::ir::translation::{
    self,
    Messages,
};
use crate::text::{
    self,
    Substitutions,
};
use crate::types::LocaleIdentifier;

/// Every loaded locale's messages plus the fallback used to fill gaps.
///
/// Built once through [`TranslationStore::initialize`] and read afterwards; a
/// shared `&TranslationStore` is safe to query from any thread.
#[derive(Debug, Clone)]
pub struct TranslationStore {
    translations: HashMap<LocaleIdentifier, Messages>,
    fallback: LocaleIdentifier,
    key_separator: String,
    markup_prefix: char,
}

impl Default for TranslationStore {
    fn default() -> Self {
        Self::new(".", '&')
    }
}

impl TranslationStore {
    /// Creates an empty store.
    ///
    /// `key_separator` splits nested message identifiers, `markup_prefix` marks
    /// format codes inside lang files.
    #[must_use]
    pub fn new(key_separator: impl Into<String>, markup_prefix: char) -> Self {
        Self {
            translations: HashMap::new(),
            fallback: LocaleIdentifier::DEFAULT,
            key_separator: key_separator.into(),
            markup_prefix,
        }
    }

    /// Replaces the store contents with the given lang files.
    ///
    /// Sources are processed in order. Unreadable files and files for unsupported
    /// locales are skipped; a file without an `identifier` key aborts. Locales
    /// merged before an abort stay loaded.
    ///
    /// # Errors
    /// - [`LocaleError::InvalidLocaleIdentifier`] if `fallback` is not supported
    /// - [`LocaleError::Config`] if a file lacks `identifier`, or no file provided
    ///   the fallback locale
    pub fn initialize(
        &mut self,
        fallback: &str,
        sources: impl IntoIterator<Item = LangSource>,
    ) -> Result<(), LocaleError> {
        let fallback = LocaleIdentifier::parse(fallback)
            .ok_or_else(|| LocaleError::InvalidLocaleIdentifier(fallback.to_string()))?;

        self.translations.clear();
        self.fallback = fallback;

        for source in sources {
            self.register_source(source)?;
        }

        if !self.translations.contains_key(&fallback) {
            return Err(LocaleError::config(format!(
                "{fallback} does not exist in the langFiles."
            )));
        }

        tracing::info!(
            fallback = %fallback,
            locales = self.translations.len(),
            "Translations loaded"
        );
        Ok(())
    }

    fn register_source(&mut self, source: LangSource) -> Result<(), LocaleError> {
        let file_name = source.file_name();
        let mut document = match source.document {
            Ok(document) => document,
            Err(err) => {
                tracing::debug!(%err, "{file_name} is not supported.");
                return Ok(());
            }
        };

        let identifier = match document.remove(IDENTIFIER_KEY) {
            Some(Value::String(identifier)) => identifier,
            Some(value @ (Value::Number(_) | Value::Bool(_))) => value.to_string(),
            _ => {
                return Err(LocaleError::config(format!(
                    "identifier key does not exist in {}.",
                    source.path.display()
                )));
            }
        };

        let Some(locale) = LocaleIdentifier::parse(&identifier) else {
            tracing::debug!("{file_name} with identifier: {identifier}, is not supported.");
            return Ok(());
        };

        let messages = translation::messages_from_map(&document);
        tracing::debug!(
            %locale,
            file = %file_name,
            messages = messages.len(),
            "Merging lang file"
        );
        self.merge(locale, messages);
        Ok(())
    }

    /// Merges `messages` into `locale`; later values replace earlier ones.
    pub fn merge(&mut self, locale: LocaleIdentifier, messages: Messages) {
        self.translations.entry(locale).or_default().extend(messages);
    }

    #[must_use]
    pub const fn fallback(&self) -> LocaleIdentifier {
        self.fallback
    }

    #[must_use]
    pub fn key_separator(&self) -> &str {
        &self.key_separator
    }

    /// Loaded locales, in identifier order.
    #[must_use]
    pub fn locales(&self) -> Vec<LocaleIdentifier> {
        let mut locales: Vec<_> = self.translations.keys().copied().collect();
        locales.sort_unstable();
        locales
    }

    #[must_use]
    pub fn messages(&self, locale: LocaleIdentifier) -> Option<&Messages> {
        self.translations.get(&locale)
    }

    /// Raw text for `message_id` in `locale` only, without fallback or formatting.
    #[must_use]
    pub fn lookup(&self, locale: &str, message_id: &str) -> Option<&str> {
        let locale = LocaleIdentifier::parse(locale)?;
        let messages = self.translations.get(&locale)?;
        translation::resolve(messages, message_id, &self.key_separator)
    }

    /// Returns the display text for `message_id` as seen by a `locale` user.
    ///
    /// Resolution order is `locale`, then the fallback, then `message_id` itself,
    /// so missing translations show up as their key. Format codes are expanded
    /// before `substitutions` are applied.
    #[must_use]
    pub fn get_translation(
        &self,
        locale: &str,
        message_id: &str,
        substitutions: &Substitutions,
    ) -> String {
        let resolved = self
            .lookup(locale, message_id)
            .or_else(|| self.lookup(self.fallback.code(), message_id))
            .unwrap_or(message_id);

        let colorized = text::colorize(resolved, self.markup_prefix);
        if substitutions.is_empty() { colorized } else { substitutions.apply(&colorized) }
    }

    /// Message identifiers the fallback has but `locale` lacks, flattened and sorted.
    #[must_use]
    pub fn missing_messages(&self, locale: LocaleIdentifier) -> Vec<String> {
        let Some(fallback_messages) = self.translations.get(&self.fallback) else {
            return Vec::new();
        };

        translation::flatten(fallback_messages, &self.key_separator)
            .into_keys()
            .filter(|message_id| self.lookup(locale.code(), message_id).is_none())
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::input::{
        LangFormat,
        LoadError,
    };
    use crate::test_utils::{
        create_source,
        create_store,
    };

    #[rstest]
    #[case("")]
    #[case("en")]
    #[case("en-US")]
    #[case("klingon")]
    fn initialize_rejects_unsupported_fallback(#[case] fallback: &str) {
        let mut store = TranslationStore::default();

        let result =
            store.initialize(fallback, vec![create_source(json!({"identifier": "en_US"}))]);

        assert_eq!(result, Err(LocaleError::InvalidLocaleIdentifier(fallback.to_string())));
    }

    #[rstest]
    fn initialize_fails_without_fallback_file() {
        let mut store = TranslationStore::default();

        let result = store.initialize(
            "en_US",
            vec![create_source(json!({"identifier": "de_DE", "greeting": "Hallo"}))],
        );

        assert!(matches!(result, Err(LocaleError::Config(message)) if message.contains("en_US")));
    }

    #[rstest]
    fn initialize_fails_when_fallback_file_is_unparseable() {
        let mut store = TranslationStore::default();
        let broken = LangSource::new(
            "lang/en_US.yml",
            Err(LoadError::UnsupportedFormat("yml".to_string())),
        );

        let result = store.initialize(
            "en_US",
            vec![broken, create_source(json!({"identifier": "de_DE", "greeting": "Hallo"}))],
        );

        assert!(matches!(result, Err(LocaleError::Config(_))));
        assert_eq!(store.locales(), vec![LocaleIdentifier::parse("de_DE").unwrap()]);
    }

    #[rstest]
    fn initialize_aborts_on_missing_identifier() {
        let mut store = TranslationStore::default();

        let result = store.initialize(
            "en_US",
            vec![
                create_source(json!({"identifier": "de_DE", "greeting": "Hallo"})),
                create_source(json!({"greeting": "Hello"})),
                create_source(json!({"identifier": "en_US", "greeting": "Hello"})),
            ],
        );

        assert!(matches!(
            result,
            Err(LocaleError::Config(message)) if message.contains("identifier key does not exist")
        ));
        // Not transactional: de_DE was merged before the bad file.
        assert_eq!(store.locales(), vec![LocaleIdentifier::parse("de_DE").unwrap()]);
    }

    #[rstest]
    fn initialize_aborts_on_empty_lang_file() {
        let mut store = TranslationStore::default();
        let empty = LangSource::new("lang/empty.yml", LangFormat::Yaml.parse(""));

        let result = store.initialize(
            "en_US",
            vec![create_source(json!({"identifier": "en_US", "hi": "Hi"})), empty],
        );

        assert!(matches!(
            result,
            Err(LocaleError::Config(message))
                if message == "identifier key does not exist in lang/empty.yml."
        ));
    }

    #[rstest]
    fn initialize_rejects_non_scalar_identifier() {
        let mut store = TranslationStore::default();

        let result = store.initialize(
            "en_US",
            vec![create_source(json!({"identifier": ["en_US"], "greeting": "Hello"}))],
        );

        assert!(matches!(result, Err(LocaleError::Config(_))));
    }

    #[googletest::test]
    fn initialize_skips_unsupported_locales() {
        let store = create_store(
            "en_US",
            vec![
                json!({"identifier": "en_US", "greeting": "Hello"}),
                json!({"identifier": "tlh_QO", "greeting": "nuqneH"}),
            ],
        );

        expect_that!(store.locales(), elements_are![eq(&LocaleIdentifier::DEFAULT)]);
        expect_that!(store.lookup("tlh_QO", "greeting"), none());
    }

    #[googletest::test]
    fn initialize_strips_identifier_key() {
        let store = create_store("en_US", vec![json!({"identifier": "en_US", "greeting": "Hi"})]);

        expect_that!(store.lookup("en_US", "identifier"), none());
        expect_that!(
            store.get_translation("en_US", "identifier", &Substitutions::new()),
            eq("identifier")
        );
    }

    #[googletest::test]
    fn initialize_merges_with_last_writer_winning() {
        let store = create_store(
            "en_US",
            vec![
                json!({"identifier": "en_US", "greeting": "hi"}),
                json!({"identifier": "en_US", "greeting": "hello", "farewell": "bye"}),
            ],
        );

        let messages = store.messages(LocaleIdentifier::DEFAULT).unwrap();
        let flattened = translation::flatten(messages, ".");
        expect_that!(flattened.len(), eq(2));
        expect_that!(flattened.get("greeting"), some(eq(&"hello")));
        expect_that!(flattened.get("farewell"), some(eq(&"bye")));
    }

    #[googletest::test]
    fn reinitialize_replaces_previous_state() {
        let mut store = create_store(
            "en_US",
            vec![
                json!({"identifier": "en_US", "greeting": "Hello"}),
                json!({"identifier": "fr_FR", "greeting": "Bonjour"}),
            ],
        );

        let sources = vec![create_source(json!({"identifier": "de_DE", "greeting": "Hallo"}))];
        store.initialize("de_DE", sources).unwrap();

        expect_that!(store.fallback().code(), eq("de_DE"));
        expect_that!(
            store.locales(),
            elements_are![eq(&LocaleIdentifier::parse("de_DE").unwrap())]
        );
        expect_that!(
            store.get_translation("fr_FR", "greeting", &Substitutions::new()),
            eq("Hallo")
        );
    }

    #[rstest]
    #[case("de_DE", "greeting", "Hallo")]
    #[case("de_DE", "farewell", "Bye")]
    #[case("fr_FR", "greeting", "Hello")]
    #[case("xx_XX", "greeting", "Hello")]
    #[case("de_DE", "unknown.message", "unknown.message")]
    #[case("en_US", "commands.help", "Shows help")]
    #[case("de_DE", "commands.help", "Zeigt Hilfe")]
    #[case("de_DE", "commands", "commands")]
    fn get_translation_resolution_order(
        #[case] locale: &str,
        #[case] message_id: &str,
        #[case] expected: &str,
    ) {
        let store = create_store(
            "en_US",
            vec![
                json!({
                    "identifier": "en_US",
                    "greeting": "Hello",
                    "farewell": "Bye",
                    "commands": { "help": "Shows help" }
                }),
                json!({
                    "identifier": "de_DE",
                    "greeting": "Hallo",
                    "commands": { "help": "Zeigt Hilfe" }
                }),
            ],
        );

        assert_eq!(store.get_translation(locale, message_id, &Substitutions::new()), expected);
    }

    #[googletest::test]
    fn get_translation_falls_back_and_substitutes() {
        let en_us = json!({"identifier": "en_US", "welcome": "Hello, {name}!"});
        let store = create_store("en_US", vec![en_us]);

        let result =
            store.get_translation("fr_FR", "welcome", &Substitutions::from([("{name}", "Sam")]));

        expect_that!(result, eq("Hello, Sam!"));
    }

    #[googletest::test]
    fn get_translation_colorizes_before_substituting() {
        let store = create_store(
            "en_US",
            vec![json!({"identifier": "en_US", "joined": "&a{player} &7joined"})],
        );

        let result = store.get_translation(
            "en_US",
            "joined",
            &Substitutions::from([("{player}", "Tom&Jerry&c")]),
        );

        expect_that!(result, eq("§aTom&Jerry&c §7joined"));
    }

    #[googletest::test]
    fn get_translation_colorizes_echoed_keys() {
        let store = create_store("en_US", vec![json!({"identifier": "en_US"})]);

        expect_that!(
            store.get_translation("en_US", "&cmissing", &Substitutions::new()),
            eq("§cmissing")
        );
    }

    #[googletest::test]
    fn get_translation_is_idempotent() {
        let store =
            create_store("en_US", vec![json!({"identifier": "en_US", "greeting": "&eHi"})]);

        let first = store.get_translation("en_US", "greeting", &Substitutions::new());
        let second = store.get_translation("en_US", "greeting", &Substitutions::new());

        expect_that!(first, eq(&second));
    }

    #[googletest::test]
    fn custom_separator_and_prefix() {
        let mut store = TranslationStore::new("/", '%');
        let sources =
            vec![create_source(json!({"identifier": "en_US", "menu": { "title": "%6Menu &6" }}))];
        store.initialize("en_US", sources).unwrap();
        let none = Substitutions::new();

        expect_that!(store.key_separator(), eq("/"));
        expect_that!(store.get_translation("en_US", "menu/title", &none), eq("§6Menu &6"));
        expect_that!(store.get_translation("en_US", "menu.title", &none), eq("menu.title"));
    }

    #[googletest::test]
    fn missing_messages_lists_fallback_only_keys() {
        let store = create_store(
            "en_US",
            vec![
                json!({"identifier": "en_US", "a": "A", "group": { "b": "B", "c": "C" }}),
                json!({"identifier": "de_DE", "a": "A", "group": { "b": "B" }}),
            ],
        );

        let de_de = LocaleIdentifier::parse("de_DE").unwrap();
        expect_that!(store.missing_messages(de_de), elements_are![eq("group.c")]);
        expect_that!(store.missing_messages(LocaleIdentifier::DEFAULT), is_empty());
    }
}
