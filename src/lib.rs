//! # EC v1 - Compressed Text Envelopes
//!
//! A small textual envelope that carries gzip-compressed, base64-encoded
//! bytes behind a two-line header, so binary or bulky JSON payloads can be
//! pasted, logged or stored as plain text.
//!
//! ## Wire Format
//!
//! ```text
//! EC v1                  <- magic and version
//! t=gz>b64;ct=json       <- transform chain and content type
//! H4sIAAAAAAAA/...       <- base64(gzip(data))
//! ```
//!
//! Lines are joined with `\n`; readers also accept `\r\n`.
//!
//! ## Quick Start
//!
//! ```rust
//! use ecv1::{decode, encode};
//!
//! let wire = encode(b"hello world").unwrap();
//! assert_eq!(decode(&wire).unwrap(), b"hello world");
//! ```
//!
//! ### Strict metadata
//!
//! By default the decoder only requires header line 2 to exist. A strict
//! codec rejects anything but the exact line the encoder writes:
//!
//! ```rust
//! use ecv1::{EnvelopeCodec, FormatError, MetadataPolicy};
//!
//! let codec = EnvelopeCodec::new().with_policy(MetadataPolicy::Strict);
//! let err = codec.decode("EC v1\nt=gz;ct=json\nH4sIAAAAAAAA/wMAAAAAAAAAAAA=");
//! assert_eq!(err, Err(FormatError::BadMetadata));
//! ```
//!
//! ## Modules
//!
//! - [`codec`]: envelope layout, metadata and the gzip/base64 codec
//! - [`io`]: input reading and output writing for the CLI
//! - [`config`]: configuration management
//! - [`error`]: error types and result aliases

pub mod codec;
pub mod config;
pub mod error;
pub mod io;
mod mode;

// Re-exports for convenience
pub use codec::{
    decode, encode, EncodeStats, Envelope, EnvelopeCodec, Metadata, MetadataPolicy,
};
pub use config::Config;
pub use error::{EcError, FormatError, Result};
pub use io::Destination;
pub use mode::Mode;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
