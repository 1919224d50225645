//! Checks a plugin data folder's lang files the same way plugin startup loads them.
//!
//! Usage: `lang-check <data-folder>`. Set `RUST_LOG=debug` to see skipped files.

use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use virion_locale::Locale;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let Some(data_folder) = std::env::args_os().nth(1).map(PathBuf::from) else {
        tracing::error!("Usage: lang-check <data-folder>");
        return ExitCode::from(2);
    };

    let locale = match Locale::load_default(&data_folder) {
        Ok(locale) => locale,
        Err(err) => {
            tracing::error!(data_folder = %data_folder.display(), "{err}");
            return ExitCode::FAILURE;
        }
    };

    let store = locale.store();
    for identifier in store.locales() {
        let count = store.messages(identifier).map_or(0, |messages| {
            virion_locale::ir::translation::flatten(messages, store.key_separator()).len()
        });
        let missing = store.missing_messages(identifier);
        tracing::info!(
            locale = %identifier,
            name = identifier.display_name(),
            messages = count,
            missing = missing.len(),
            "Loaded locale"
        );
        for message_id in missing {
            tracing::warn!(
                locale = %identifier,
                message_id = %message_id,
                "Falls back to {}",
                store.fallback()
            );
        }
    }

    ExitCode::SUCCESS
}
