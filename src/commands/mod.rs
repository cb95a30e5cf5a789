//! Command implementations for the chartloader CLI

pub mod completions;
pub mod inspect;
pub mod version;
