//! Text post-processing applied to resolved translations.

use std::collections::BTreeMap;

/// Escape character the client interprets as "format code follows".
pub const FORMAT_ESCAPE: char = '\u{00A7}';

/// Returns true for characters the client accepts after [`FORMAT_ESCAPE`].
///
/// Colors `0-9` and `a-g`, styles `k-o`, and `r` (reset).
#[must_use]
pub const fn is_format_code(c: char) -> bool {
    matches!(c, '0'..='9' | 'a'..='g' | 'k'..='o' | 'r')
}

/// Rewrites `prefix` + format code into [`FORMAT_ESCAPE`] + format code.
///
/// A prefix not followed by a format code is left alone, so `&` in prose survives.
///
/// ```
/// use virion_locale::text::colorize;
///
/// assert_eq!(colorize("&aReady & waiting", '&'), "\u{a7}aReady & waiting");
/// ```
#[must_use]
pub fn colorize(text: &str, prefix: char) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == prefix && chars.peek().is_some_and(|next| is_format_code(*next)) {
            result.push(FORMAT_ESCAPE);
        } else {
            result.push(c);
        }
    }

    result
}

/// Placeholder tokens and their replacement values.
///
/// Tokens are matched literally. Inserting the same token twice keeps the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitutions {
    values: BTreeMap<String, String>,
}

impl Substitutions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Substitutions::insert`].
    #[must_use]
    pub fn with(mut self, token: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(token, value);
        self
    }

    pub fn insert(&mut self, token: impl Into<String>, value: impl Into<String>) {
        self.values.insert(token.into(), value.into());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Replaces every token occurrence in a single left-to-right pass.
    ///
    /// When several tokens start at the same position the longest one wins.
    /// Inserted values are never rescanned, and empty tokens never match.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        if self.values.is_empty() {
            return text.to_string();
        }

        let mut tokens: Vec<(&str, &str)> = self
            .values
            .iter()
            .filter(|(token, _)| !token.is_empty())
            .map(|(token, value)| (token.as_str(), value.as_str()))
            .collect();
        tokens.sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let mut result = String::with_capacity(text.len());
        let mut rest = text;

        while !rest.is_empty() {
            let matched = tokens
                .iter()
                .find_map(|(token, value)| rest.strip_prefix(token).map(|tail| (*value, tail)));

            if let Some((value, tail)) = matched {
                result.push_str(value);
                rest = tail;
                continue;
            }

            let mut chars = rest.chars();
            if let Some(c) = chars.next() {
                result.push(c);
            }
            rest = chars.as_str();
        }

        result
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Substitutions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Substitutions {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}
