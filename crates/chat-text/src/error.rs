//! Error types for chat text nodes.

use thiserror::Error;

/// Errors that can occur when building a text node.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TextError {
    /// A required argument was missing or unusable.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Errors that can occur when parsing a hover or click action identifier.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ActionParseError {
    /// Unknown hover action name.
    #[error("unknown hover action: {0}")]
    UnknownHoverAction(String),

    /// Unknown click action name.
    #[error("unknown click action: {0}")]
    UnknownClickAction(String),
}
