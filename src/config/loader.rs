//! Settings file loading.

use std::path::Path;

use super::{
    LocaleSettings,
    SettingsError,
};

/// Name of the settings file inside the plugin data folder.
pub const SETTINGS_FILE_NAME: &str = "locale.json";

/// Reads `locale.json` from the data folder.
///
/// # Returns
/// - `Ok(Some(settings))`: the file exists and parsed
/// - `Ok(None)`: no settings file
/// - `Err(SettingsError)`: read or parse failure
pub(super) fn load_from_data_folder(
    data_folder: &Path,
) -> Result<Option<LocaleSettings>, SettingsError> {
    let settings_path = data_folder.join(SETTINGS_FILE_NAME);

    if !settings_path.exists() {
        tracing::debug!("Settings file not found: {:?}", settings_path);
        return Ok(None);
    }

    tracing::debug!("Loading settings from: {:?}", settings_path);

    let content = std::fs::read_to_string(&settings_path)?;
    let settings: LocaleSettings = serde_json::from_str(&content)?;

    Ok(Some(settings))
}

impl LocaleSettings {
    /// Loads and validates the settings of a data folder, falling back to defaults
    /// when no settings file exists.
    pub fn load(data_folder: &Path) -> Result<Self, SettingsError> {
        let settings = load_from_data_folder(data_folder)?.unwrap_or_default();
        settings.validate().map_err(SettingsError::ValidationErrors)?;
        tracing::debug!("Settings loaded: {:?}", settings);
        Ok(settings)
    }
}
