//! Error types for rentcar
//!
//! The search engine itself never fails. These errors come from the layers
//! around it: configuration and catalog files.

use thiserror::Error;

/// Errors that can occur in rentcar
#[derive(Debug, Error)]
pub enum RentcarError {
    /// Catalog data failed validation
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing errors
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization errors
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for rentcar operations
pub type RentcarResult<T> = Result<T, RentcarError>;
