use std::path::PathBuf;

use thiserror::Error;
use toolkit_core::ColorParseError;

/// Errors raised while loading or applying theme overrides
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("unknown color scheme `{0}` (expected `light` or `dark`)")]
    UnknownScheme(String),

    #[error("unknown theme section `{0}` (expected `shared`, `sales`, `delivery` or `qualityAssurance`)")]
    UnknownSection(String),

    #[error("unknown theme path `{0}`")]
    UnknownPath(String),

    #[error("invalid value for `{path}`: {reason}")]
    InvalidValue { path: String, reason: String },

    #[error(transparent)]
    Color(#[from] ColorParseError),

    #[error("failed to parse theme overrides: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised by persistent key/value storage
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode storage: {0}")]
    Encode(#[from] serde_json::Error),
}
