use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::text::FORMAT_ESCAPE;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "filePatterns[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Settings validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load settings file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse settings: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Plugin-side localization settings, read from `locale.json` in the data folder.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocaleSettings {
    /// Locale used when a player's own locale or a message is missing.
    ///
    /// Checked against the supported identifiers at initialization, not here.
    pub fallback_identifier: String,

    /// Lang directory, relative to the data folder.
    pub lang_directory: String,

    /// File name globs selecting lang files inside `lang_directory`.
    pub file_patterns: Vec<String>,

    /// Separator for nested message identifiers (`commands.help.usage`).
    pub key_separator: String,

    /// Character that introduces a format code in lang files (`&a` -> green).
    pub markup_prefix: char,
}

impl LocaleSettings {
    /// # Errors
    /// - Required field is empty
    /// - Invalid glob pattern
    /// - Markup prefix collides with the output escape
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.lang_directory.trim().is_empty() {
            errors.push(ValidationError::new(
                "langDirectory",
                "The directory cannot be empty. Example: \"lang\"",
            ));
        }

        if self.key_separator.is_empty() {
            errors.push(ValidationError::new(
                "keySeparator",
                "The separator cannot be empty. Please specify a separator, for example: \".\" (dot)",
            ));
        }

        if self.file_patterns.is_empty() {
            errors.push(ValidationError::new(
                "filePatterns",
                "At least one pattern is required. Example: [\"*.yml\"]",
            ));
        }

        for (index, pattern) in self.file_patterns.iter().enumerate() {
            if let Err(e) = globset::Glob::new(pattern) {
                errors.push(ValidationError::new(
                    format!("filePatterns[{index}]"),
                    format!("Invalid glob pattern '{pattern}': {e}"),
                ));
            }
        }

        if self.markup_prefix == FORMAT_ESCAPE {
            errors.push(ValidationError::new(
                "markupPrefix",
                format!("The prefix cannot be the format escape '{FORMAT_ESCAPE}'. Example: \"&\""),
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for LocaleSettings {
    fn default() -> Self {
        Self {
            fallback_identifier: "en_US".to_string(),
            lang_directory: "lang".to_string(),
            file_patterns: vec![
                "*.yml".to_string(),
                "*.yaml".to_string(),
                "*.json".to_string(),
                "*.ini".to_string(),
            ],
            key_separator: ".".to_string(),
            markup_prefix: '&',
        }
    }
}
