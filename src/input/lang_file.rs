//! Lang file input definitions

use std::path::{
    Path,
    PathBuf,
};

use serde_json::{
    Map,
    Value,
};
use thiserror::Error;

/// Top-level key naming the locale a lang file belongs to.
pub const IDENTIFIER_KEY: &str = "identifier";

/// Parsed lang file: top-level keys to strings or nested mappings.
pub type LangDocument = Map<String, Value>;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read lang file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported lang file format: {0}")]
    UnsupportedFormat(String),
}

/// Parser backends for lang files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LangFormat {
    Json,
    /// YAML, also used for `.ini` lang files.
    Yaml,
}

impl LangFormat {
    /// Picks a format from the file extension (case-insensitive).
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Json),
            "yml" | "yaml" | "ini" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Parses `content` into a lang document.
    ///
    /// Empty files and roots that are not a mapping yield an empty document, which
    /// initialization then rejects for lacking an `identifier`. Only syntax errors
    /// fail here.
    pub fn parse(self, content: &str) -> Result<LangDocument, LoadError> {
        if content.trim().is_empty() {
            return Ok(LangDocument::new());
        }

        let value: Value = match self {
            Self::Json => serde_json::from_str(content)?,
            Self::Yaml => serde_yaml::from_str(content)?,
        };

        match value {
            Value::Object(map) => Ok(map),
            other => {
                tracing::debug!(root = %other, "Lang file root is not a mapping");
                Ok(LangDocument::new())
            }
        }
    }
}

/// Turns a lang file into a [`LangDocument`].
///
/// Hosts with their own config layer implement this; [`FileLoader`] covers plain files.
pub trait StructuredLoader {
    fn load(&self, path: &Path) -> Result<LangDocument, LoadError>;
}

/// Reads lang files from disk, choosing the parser by extension.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileLoader;

impl StructuredLoader for FileLoader {
    fn load(&self, path: &Path) -> Result<LangDocument, LoadError> {
        let format = LangFormat::from_path(path).ok_or_else(|| {
            LoadError::UnsupportedFormat(
                path.extension().and_then(|e| e.to_str()).unwrap_or("(none)").to_string(),
            )
        })?;

        let content = std::fs::read_to_string(path)?;
        format.parse(&content)
    }
}

/// One lang file handed to initialization: its path and the loader's verdict.
#[derive(Debug)]
pub struct LangSource {
    pub path: PathBuf,
    pub document: Result<LangDocument, LoadError>,
}

impl LangSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, document: Result<LangDocument, LoadError>) -> Self {
        Self { path: path.into(), document }
    }

    /// Loads `path` with `loader`, keeping a failure instead of returning it.
    pub fn load(loader: &dyn StructuredLoader, path: &Path) -> Self {
        Self::new(path, loader.load(path))
    }

    /// File name for diagnostics, or the full path if it has none.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.path.file_name().map_or_else(
            || self.path.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
    }
}
