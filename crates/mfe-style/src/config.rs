//! Registry documents and environment configuration.
//!
//! Variant and component registries are plain data. They can be built in
//! code or loaded from JSON / YAML documents; the format is chosen from the
//! file extension.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::LoadError;

/// Environment variable that pins the style mode for the process.
pub const STYLE_MODE_ENV: &str = "MFE_STYLE_MODE";

/// Serialization format of a registry document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Picks the format from a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(DocumentFormat::Json),
            "yaml" | "yml" => Some(DocumentFormat::Yaml),
            _ => None,
        }
    }

    /// Parses a document in this format.
    pub fn parse<T: DeserializeOwned>(self, source: &str) -> Result<T, LoadError> {
        match self {
            DocumentFormat::Json => Ok(serde_json::from_str(source)?),
            DocumentFormat::Yaml => Ok(serde_yaml::from_str(source)?),
        }
    }
}

/// Reads and parses a document, choosing the format from the extension.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let format = DocumentFormat::from_path(path).ok_or_else(|| LoadError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let source = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("loading {:?} registry from {}", format, path.display());
    format.parse(&source)
}
