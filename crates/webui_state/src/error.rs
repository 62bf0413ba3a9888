//! Error types for webui_state

use thiserror::Error;

/// Errors that can occur while configuring or populating a state store
#[derive(Error, Debug)]
pub enum StateError {
    /// Storage backend name not recognized
    #[error("unknown storage type '{0}' (expected memory, localStorage, or sessionStorage)")]
    UnknownStorageType(String),

    /// Debug history cap below zero
    #[error("max debug history must not be negative, got {0}")]
    NegativeHistoryCap(i64),

    /// Scope name not recognized
    #[error("unknown state scope '{0}'")]
    UnknownScope(String),

    /// A value could not be converted to JSON
    #[error("failed to encode state '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Malformed JSON input
    #[error("invalid state JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Well-formed JSON with the wrong shape
    #[error("invalid state snapshot: {0}")]
    InvalidSnapshot(String),

    /// Malformed TOML configuration
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result type for webui_state operations
pub type Result<T> = std::result::Result<T, StateError>;
