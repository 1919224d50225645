//! Intermediate representation of loaded translations.

pub mod translation;
