//! Localization settings.
/// Settings file loader
mod loader;
/// Settings types and validation
mod types;

pub use loader::SETTINGS_FILE_NAME;
pub use types::{
    LocaleSettings,
    SettingsError,
    ValidationError,
};
