//! Error types for registry wiring and document loading.

use std::path::PathBuf;

use thiserror::Error;

/// A static registry is wired incorrectly.
///
/// These errors point at programming mistakes (a variant name that was never
/// registered, a default that references a value outside its scale). They are
/// returned immediately and are never recovered from internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// A resolver call named a variant that is not registered.
    #[error("unknown typography variant '{name}'. Available: {}", .available.join(", "))]
    UnknownVariant {
        name: String,
        available: Vec<String>,
    },
    /// A variant default does not resolve to a token.
    #[error("variant '{variant}' has invalid default {field} '{value}'")]
    InvalidDefault {
        variant: String,
        field: &'static str,
        value: String,
    },
}

/// Failure to load a registry document from disk or from a string.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The extension does not map to a known document format.
    #[error("unsupported registry format for '{}': expected .json, .yaml or .yml", .path.display())]
    UnsupportedFormat { path: PathBuf },
    /// JSON syntax or shape error.
    #[error("invalid JSON registry: {0}")]
    Json(#[from] serde_json::Error),
    /// YAML syntax or shape error.
    #[error("invalid YAML registry: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// The document parsed but describes an inconsistent registry.
    #[error(transparent)]
    Invalid(#[from] ConfigurationError),
}
