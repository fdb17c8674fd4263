//! Error types for combobox configuration.
//!
//! The interaction engine itself is total and never fails; errors only arise
//! at the edges where configuration is parsed or loaded.

use std::path::PathBuf;

/// Result type alias for combobox operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring a combobox.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A variant name did not match any known variant.
    #[error("Unknown combobox variant '{name}' (expected one of: {expected})")]
    UnknownVariant { name: String, expected: String },

    /// File I/O error.
    #[error("Failed to read combobox config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file extension is neither `.toml` nor `.json`.
    #[error("Unsupported config format for '{path}' (expected .toml or .json)")]
    UnsupportedFormat { path: PathBuf },

    /// TOML parsing error.
    #[error("Invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("Failed to serialize config as TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// JSON parsing or serialization error.
    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an unknown-variant error.
    pub fn unknown_variant(name: impl Into<String>, expected: &[&str]) -> Self {
        Self::UnknownVariant {
            name: name.into(),
            expected: expected.join(", "),
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an unsupported-format error.
    pub fn unsupported_format(path: impl Into<PathBuf>) -> Self {
        Self::UnsupportedFormat { path: path.into() }
    }
}
