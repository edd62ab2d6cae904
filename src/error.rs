//! Error types for capture loading

use thiserror::Error;

/// Errors raised while loading a capture summary
#[derive(Error, Debug)]
pub enum AuditError {
    /// Capture file does not exist
    #[error("capture file not found: {0}")]
    FileNotFound(String),

    /// I/O failure while reading the capture
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AuditError>;
