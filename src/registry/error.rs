//! Errors raised while building a registry from external data.
//!
//! Resolution itself never fails; only loading a mapping table can.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading registry data
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Duplicate mapping for checklist item: {0}")]
    DuplicateMapping(String),

    #[error("Unknown category '{category}' for checklist item {item}")]
    UnknownCategory { item: String, category: String },

    #[error("Failed to read mapping file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
