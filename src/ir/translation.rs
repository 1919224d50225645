//! In-memory representation of one locale's messages.

use std::collections::BTreeMap;

use serde_json::Value;

/// Message identifier -> value, for one locale.
pub type Messages = BTreeMap<String, TranslationValue>;

/// A translated message, or a group of nested messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationValue {
    Text(String),
    Group(Messages),
}

impl TranslationValue {
    /// Converts parsed lang file content.
    ///
    /// Numbers and booleans become their textual form, sequences become groups
    /// keyed by index, and nulls are dropped.
    #[must_use]
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(Self::Text(s.clone())),
            Value::Bool(_) | Value::Number(_) => Some(Self::Text(value.to_string())),
            Value::Array(items) => Some(Self::Group(
                items
                    .iter()
                    .enumerate()
                    .filter_map(|(index, item)| Some((index.to_string(), Self::from_json(item)?)))
                    .collect(),
            )),
            Value::Object(map) => Some(Self::Group(messages_from_map(map))),
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Group(_) => None,
        }
    }
}

/// Converts a parsed mapping into messages, dropping null values.
#[must_use]
pub fn messages_from_map(map: &serde_json::Map<String, Value>) -> Messages {
    map.iter()
        .filter_map(|(key, value)| Some((key.clone(), TranslationValue::from_json(value)?)))
        .collect()
}

/// Finds the text for `message_id`.
///
/// The identifier is first tried as a literal top-level key, then as a
/// `separator`-delimited path through nested groups. Paths ending on a group miss.
#[must_use]
pub fn resolve<'a>(messages: &'a Messages, message_id: &str, separator: &str) -> Option<&'a str> {
    if let Some(TranslationValue::Text(text)) = messages.get(message_id) {
        return Some(text);
    }

    if separator.is_empty() || !message_id.contains(separator) {
        return None;
    }

    let mut segments = message_id.split(separator);
    let mut current = messages.get(segments.next()?)?;
    for segment in segments {
        match current {
            TranslationValue::Group(children) => current = children.get(segment)?,
            TranslationValue::Text(_) => return None,
        }
    }

    current.as_text()
}

/// Flattens nested messages into separator-joined identifiers.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use virion_locale::ir::translation::{flatten, messages_from_map};
///
/// let json = json!({ "commands": { "help": "Shows help" } });
/// let messages = messages_from_map(json.as_object().unwrap());
///
/// let flattened = flatten(&messages, ".");
/// assert_eq!(flattened.get("commands.help"), Some(&"Shows help"));
/// ```
#[must_use]
pub fn flatten<'a>(messages: &'a Messages, separator: &str) -> BTreeMap<String, &'a str> {
    let mut result = BTreeMap::new();
    flatten_into(messages, separator, None, &mut result);
    result
}

fn flatten_into<'a>(
    messages: &'a Messages,
    separator: &str,
    prefix: Option<&str>,
    result: &mut BTreeMap<String, &'a str>,
) {
    for (key, value) in messages {
        let full_key = prefix.map_or_else(|| key.clone(), |p| format!("{p}{separator}{key}"));
        match value {
            TranslationValue::Text(text) => {
                result.insert(full_key, text);
            }
            TranslationValue::Group(children) => {
                flatten_into(children, separator, Some(&full_key), result);
            }
        }
    }
}
