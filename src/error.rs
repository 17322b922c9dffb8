//! Error types for cacheopt
//!
//! All modules use `CacheOptResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for cacheopt operations
pub type CacheOptResult<T> = Result<T, CacheOptError>;

/// All errors that can occur in cacheopt
#[derive(Error, Debug)]
pub enum CacheOptError {
    // Cache option syntax errors
    #[error("invalid field '{0}' must be a key=value pair")]
    MalformedField(String),

    #[error("invalid field '{0}': unbalanced quotes")]
    MalformedQuote(String),

    // Cache option semantic errors
    #[error("invalid cache type '{0}'")]
    InvalidCacheType(String),

    #[error("invalid cache format '{0}'")]
    InvalidCacheFormat(String),

    #[error("cache 'name' is required")]
    MissingName,

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // General errors
    #[error("{0}")]
    User(String),
}

impl CacheOptError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Whether the error came from parsing a cache option string
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedField(_)
                | Self::MalformedQuote(_)
                | Self::InvalidCacheType(_)
                | Self::InvalidCacheFormat(_)
                | Self::MissingName
        )
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::MalformedField(_) => {
                Some("Separate fields with ';', e.g. type=build;format=volume")
            }
            Self::MalformedQuote(_) => {
                Some("Wrap the whole field in double quotes and write \"\" for a literal quote")
            }
            Self::InvalidCacheType(_) => Some("Valid cache types: build, launch"),
            Self::InvalidCacheFormat(_) => Some("Valid cache formats: image, volume"),
            Self::MissingName => Some("Add name=<image or volume name>, e.g. name=myorg/cache:build"),
            Self::ConfigInvalid { .. } => Some("Fix or remove the config file, or pass --config <path>"),
            _ => None,
        }
    }
}
