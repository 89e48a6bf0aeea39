//! Error types for the support shells
//!
//! The intent responder itself is total; only configuration, I/O and the
//! HTTP server can fail.

use thiserror::Error;

/// Result type alias for shell operations
pub type Result<T> = std::result::Result<T, ResponderError>;

#[derive(Error, Debug)]
pub enum ResponderError {
    #[error("Configuration error: {0}")]
    Config(String),

    // =============================
    // External Library Conversions
    // =============================

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
