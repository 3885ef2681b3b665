//! Error types for Lucioles

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for Lucioles operations
#[derive(Debug, Error)]
pub enum LuciolesError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Value out of range: {field} must be between {min} and {max}, got {value}")]
    ValueOutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },

    #[error("Asset not found: {}", .0.display())]
    AssetNotFound(PathBuf),

    #[error("Audio error: {0}")]
    AudioError(String),

    #[error("Render error: {0}")]
    RenderError(String),
}

/// Result type alias for Lucioles operations
pub type Result<T> = std::result::Result<T, LuciolesError>;

impl From<toml::de::Error> for LuciolesError {
    fn from(err: toml::de::Error) -> Self {
        LuciolesError::TomlParseError(err.to_string())
    }
}
