//! Core types used throughout the crate.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Client languages the host can negotiate, with their display names.
///
/// Order follows the in-game language menu.
pub const ALLOWED_IDENTIFIERS: &[(&str, &str)] = &[
    ("en_US", "English (US)"),
    ("en_GB", "English (UK)"),
    ("de_DE", "Deutsch (Deutschland)"),
    ("es_ES", "Español (España)"),
    ("es_MX", "Español (México)"),
    ("fr_FR", "Français (France)"),
    ("fr_CA", "Français (Canada)"),
    ("it_IT", "Italiano (Italia)"),
    ("ja_JP", "日本語 (日本)"),
    ("ko_KR", "한국어 (대한민국)"),
    ("pt_BR", "Português (Brasil)"),
    ("pt_PT", "Português (Portugal)"),
    ("ru_RU", "Русский (Россия)"),
    ("zh_CN", "简体中文"),
    ("zh_TW", "繁體中文"),
    ("nl_NL", "Nederlands (Nederland)"),
    ("bg_BG", "Български (BG)"),
    ("cs_CZ", "Čeština (Česká republika)"),
    ("da_DK", "Dansk (DA)"),
    ("el_GR", "Ελληνικά (Ελλάδα)"),
    ("fi_FI", "Suomi (Suomi)"),
    ("hu_HU", "Magyar (HU)"),
    ("id_ID", "Bahasa Indonesia (Indonesia)"),
    ("nb_NO", "Norsk bokmål (Norge)"),
    ("pl_PL", "Polski (PL)"),
    ("sk_SK", "Slovensky (SK)"),
    ("sv_SE", "Svenska (Sverige)"),
    ("tr_TR", "Türkçe (Türkiye)"),
    ("uk_UA", "Українська (Україна)"),
];

static IDENTIFIER_INDEX: LazyLock<HashMap<&'static str, LocaleIdentifier>> =
    LazyLock::new(|| {
        ALLOWED_IDENTIFIERS
            .iter()
            .map(|&(code, display_name)| (code, LocaleIdentifier { code, display_name }))
            .collect()
    });

/// A locale identifier that is known to belong to [`ALLOWED_IDENTIFIERS`].
///
/// Only obtainable through [`LocaleIdentifier::parse`], so holding one is proof of
/// membership. Matching is exact: `en_us` is not `en_US`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocaleIdentifier {
    code: &'static str,
    display_name: &'static str,
}

impl LocaleIdentifier {
    /// The identifier used when nothing else is configured.
    pub const DEFAULT: Self = Self { code: "en_US", display_name: "English (US)" };

    /// Looks up `code` in the allowed set.
    #[must_use]
    pub fn parse(code: &str) -> Option<Self> {
        IDENTIFIER_INDEX.get(code).copied()
    }

    #[must_use]
    pub fn is_allowed(code: &str) -> bool {
        IDENTIFIER_INDEX.contains_key(code)
    }

    /// Every supported identifier, in menu order.
    pub fn all() -> impl Iterator<Item = Self> {
        ALLOWED_IDENTIFIERS.iter().map(|&(code, display_name)| Self { code, display_name })
    }

    #[must_use]
    pub const fn code(self) -> &'static str {
        self.code
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        self.display_name
    }
}

impl Default for LocaleIdentifier {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for LocaleIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl AsRef<str> for LocaleIdentifier {
    fn as_ref(&self) -> &str {
        self.code
    }
}
