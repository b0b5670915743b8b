//! EC v1 error types.
//!
//! Two layers:
//!
//! - [`FormatError`] describes a malformed envelope. Its messages are short
//!   and stable (`"bad header"`, `"bad base64"`, ...) since they are what a
//!   user sees when a decode is rejected.
//! - [`EcError`] is the crate-wide error, wrapping format failures together
//!   with usage, configuration and I/O failures.

use thiserror::Error;

/// Reasons an envelope is rejected during decode.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Fewer than three lines were present.
    #[error("too few lines")]
    TooFewLines,

    /// Line 1 is not exactly `EC v1`.
    #[error("bad header")]
    BadHeader,

    /// Line 2 was rejected (strict metadata policy, or unparseable metadata).
    #[error("bad metadata")]
    BadMetadata,

    /// Line 3 is not valid padded standard base64.
    #[error("bad base64")]
    BadBase64,

    /// The decoded payload is not a complete gzip stream.
    #[error("bad compressed stream")]
    BadCompressedStream,

    /// The input bytes are not UTF-8 text.
    #[error("input is not text")]
    NotText,
}

/// EC v1 errors.
#[derive(Error, Debug)]
pub enum EcError {
    /// Wrong or missing invocation arguments.
    #[error("Usage error: {0}")]
    Usage(String),

    /// Malformed envelope.
    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    /// Compression operation failed.
    #[error("Compression error: {0}")]
    Compression(String),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for EC v1 operations
pub type Result<T> = std::result::Result<T, EcError>;

impl From<base64::DecodeError> for FormatError {
    fn from(_: base64::DecodeError) -> Self {
        FormatError::BadBase64
    }
}
