//! gzip stage of the transform chain.
//!
//! Wraps `flate2` with the container format the envelope declares as `gz`.
//! A single gzip member is read on decompression; anything after the first
//! member's trailer is ignored.

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::{Read, Write};

use crate::error::{EcError, FormatError, Result};

/// Default compression level (zlib's default)
pub const DEFAULT_LEVEL: u32 = 6;

/// Highest compression level accepted
pub const MAX_LEVEL: u32 = 9;

/// gzip codec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GzipCodec {
    /// Compression level (0-9)
    pub level: u32,
}

impl Default for GzipCodec {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL,
        }
    }
}

impl GzipCodec {
    /// Create new gzip codec with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create codec with custom level, clamped to 0-9
    pub fn with_level(level: u32) -> Self {
        Self {
            level: level.min(MAX_LEVEL),
        }
    }

    /// Compress bytes into a gzip container
    pub fn compress_bytes(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::new(self.level));
        encoder
            .write_all(data)
            .map_err(|e| EcError::Compression(e.to_string()))?;
        encoder
            .finish()
            .map_err(|e| EcError::Compression(e.to_string()))
    }

    /// Decompress a gzip container
    pub fn decompress_bytes(&self, data: &[u8]) -> std::result::Result<Vec<u8>, FormatError> {
        // An empty buffer has no gzip header at all.
        if data.is_empty() {
            return Err(FormatError::BadCompressedStream);
        }

        let mut decoder = GzDecoder::new(data);
        let mut decompressed = Vec::new();
        decoder.read_to_end(&mut decompressed).map_err(|e| {
            tracing::debug!("gzip stream rejected: {e}");
            FormatError::BadCompressedStream
        })?;
        Ok(decompressed)
    }
}
