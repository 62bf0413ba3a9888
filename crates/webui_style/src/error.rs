//! Error types for webui_style

use thiserror::Error;

/// Errors raised when parsing style vocabulary from text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// The name does not match any breakpoint or state modifier
    #[error("unknown modifier: {0}")]
    UnknownModifier(String),

    /// The name does not match any edge
    #[error("unknown edge: {0}")]
    UnknownEdge(String),

    /// The name does not match any axis
    #[error("unknown axis: {0}")]
    UnknownAxis(String),
}

/// Result type for webui_style operations
pub type Result<T> = std::result::Result<T, StyleError>;
