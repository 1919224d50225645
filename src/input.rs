//! Lang file inputs: discovery on disk and structured loading.

pub mod discovery;
pub mod lang_file;

pub use discovery::{
    DiscoveryError,
    find_lang_files,
};
pub use lang_file::{
    FileLoader,
    IDENTIFIER_KEY,
    LangDocument,
    LangFormat,
    LangSource,
    LoadError,
    StructuredLoader,
};
