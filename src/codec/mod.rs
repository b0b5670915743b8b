//! EC v1 envelope codec.
//!
//! An envelope is three lines of text wrapping gzip-compressed,
//! base64-encoded bytes:
//!
//! | Line | Content              | Checked on decode              |
//! |------|----------------------|--------------------------------|
//! | 1    | `EC v1`              | exact match                    |
//! | 2    | `t=gz>b64;ct=json`   | presence only, unless strict   |
//! | 3    | base64(gzip(data))   | base64, then gzip stream       |
//!
//! # Usage
//!
//! ```rust
//! use ecv1::codec::{decode, encode};
//!
//! let wire = encode(b"hello world").unwrap();
//! assert!(wire.starts_with("EC v1\nt=gz>b64;ct=json\n"));
//! assert_eq!(decode(&wire).unwrap(), b"hello world");
//! ```

mod engine;
mod envelope;
mod gzip;
mod meta;

pub use engine::{decode, encode, EncodeStats, EnvelopeCodec, MetadataPolicy};
pub use envelope::{Envelope, MAGIC};
pub use gzip::{GzipCodec, DEFAULT_LEVEL, MAX_LEVEL};
pub use meta::{ContentType, Metadata, Transform, DEFAULT_METADATA};
