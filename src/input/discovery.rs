//! Lang directory scanning.

use std::path::{
    Path,
    PathBuf,
};

use globset::{
    Glob,
    GlobSet,
    GlobSetBuilder,
};
use ignore::WalkBuilder;

#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("Invalid lang file pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to build glob set: {0}")]
    GlobSetBuild(#[from] globset::Error),
}

fn build_glob_set(patterns: &[String]) -> Result<GlobSet, DiscoveryError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern)
            .map_err(|source| DiscoveryError::InvalidPattern { pattern: pattern.clone(), source })?;
        builder.add(glob);
    }
    Ok(builder.build()?)
}

/// Lists the lang files directly inside `lang_dir` whose file name matches one of
/// `patterns`, in ascending path order.
///
/// Subdirectories are not entered. A missing directory yields no files.
pub fn find_lang_files(
    lang_dir: &Path,
    patterns: &[String],
) -> Result<Vec<PathBuf>, DiscoveryError> {
    let pattern_set = build_glob_set(patterns)?;

    if !lang_dir.is_dir() {
        tracing::debug!(lang_dir = %lang_dir.display(), "Lang directory does not exist");
        return Ok(Vec::new());
    }

    let mut found_files = Vec::new();
    for result in WalkBuilder::new(lang_dir)
        .max_depth(Some(1))
        .standard_filters(false)
        .follow_links(false)
        .build()
    {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(?err, "Failed to read lang directory entry");
                continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();
        let Some(file_name) = path.file_name() else {
            continue;
        };
        if !pattern_set.is_match(file_name) {
            tracing::debug!(file = %path.display(), "Skipping file not matching lang patterns");
            continue;
        }

        found_files.push(path.to_path_buf());
    }

    found_files.sort();
    Ok(found_files)
}
