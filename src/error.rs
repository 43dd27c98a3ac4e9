use std::io;

use thiserror::Error;

use crate::validate::ValidationReport;

/// Library-wide error type for buildconf operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Conventional config file not found at the project root.
    #[error("Build config not found: {0}")]
    ConfigMissing(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// JSON serialization error.
    #[error("JSON serialize error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    /// Validation found error-severity violations.
    #[error("Invalid build config: {0}")]
    Invalid(ValidationReport),
}
