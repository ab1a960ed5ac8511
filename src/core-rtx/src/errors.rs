//! Error types for robots.txt configuration loading.
//!
//! Assembling directives never fails: everything that can go wrong happens
//! before that, while reading the config file or the base URL.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for robots.txt configuration operations.
#[derive(Debug, Error)]
pub enum RobotsError {
    /// Config file could not be read
    #[error("Cannot read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML, or its shape does not match
    #[error("Invalid TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Config file is not valid JSON, or its shape does not match
    #[error("Invalid JSON config: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Config file extension is neither `.toml` nor `.json`
    #[error("Unsupported config format (expected .toml or .json): {}", .0.display())]
    UnsupportedConfigFormat(PathBuf),

    /// Base URL used to resolve sitemap paths is not a valid URL
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

/// Type alias for Result with RobotsError
pub type Result<T> = std::result::Result<T, RobotsError>;
