//! Envelope codec: encode bytes into EC v1 text and back.
//!
//! Encoding runs the fixed chain `gz>b64`; decoding validates the envelope
//! and undoes it. How header line 2 is treated on decode is controlled by
//! [`MetadataPolicy`].

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use super::envelope::Envelope;
use super::gzip::GzipCodec;
use crate::error::{FormatError, Result};

/// Treatment of header line 2 on decode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MetadataPolicy {
    /// Line 2 must exist; its value is ignored.
    #[default]
    Lenient,
    /// Line 2 must equal `t=gz>b64;ct=json`.
    Strict,
}

/// Sizes observed while encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeStats {
    /// Input size in bytes
    pub original_bytes: usize,
    /// gzip output size in bytes
    pub compressed_bytes: usize,
    /// Full envelope size in bytes
    pub wire_bytes: usize,
}

impl EncodeStats {
    /// Original size over envelope size
    pub fn ratio(&self) -> f64 {
        if self.wire_bytes == 0 {
            0.0
        } else {
            self.original_bytes as f64 / self.wire_bytes as f64
        }
    }
}

/// EC v1 codec
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnvelopeCodec {
    gzip: GzipCodec,
    /// Line 2 handling on decode
    pub policy: MetadataPolicy,
}

impl EnvelopeCodec {
    /// Create new codec (default level, lenient metadata)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set gzip compression level (clamped to 0-9)
    pub fn with_level(mut self, level: u32) -> Self {
        self.gzip = GzipCodec::with_level(level);
        self
    }

    /// Set metadata policy
    pub fn with_policy(mut self, policy: MetadataPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// gzip compression level in use
    pub fn level(&self) -> u32 {
        self.gzip.level
    }

    /// Encode bytes into envelope text
    pub fn encode(&self, data: &[u8]) -> Result<String> {
        self.encode_with_stats(data).map(|(wire, _)| wire)
    }

    /// Encode bytes, also reporting sizes
    pub fn encode_with_stats(&self, data: &[u8]) -> Result<(String, EncodeStats)> {
        let compressed = self.gzip.compress_bytes(data)?;
        let wire = Envelope::new(BASE64.encode(&compressed)).to_string();

        let stats = EncodeStats {
            original_bytes: data.len(),
            compressed_bytes: compressed.len(),
            wire_bytes: wire.len(),
        };
        tracing::debug!(
            original = stats.original_bytes,
            compressed = stats.compressed_bytes,
            wire = stats.wire_bytes,
            "encoded envelope"
        );

        Ok((wire, stats))
    }

    /// Decode envelope text back into the original bytes
    pub fn decode(&self, text: &str) -> std::result::Result<Vec<u8>, FormatError> {
        let envelope = Envelope::parse(text)?;
        self.decode_envelope(&envelope)
    }

    /// Decode an already parsed envelope
    pub fn decode_envelope(
        &self,
        envelope: &Envelope,
    ) -> std::result::Result<Vec<u8>, FormatError> {
        if !envelope.has_default_metadata() {
            match self.policy {
                MetadataPolicy::Strict => return Err(FormatError::BadMetadata),
                MetadataPolicy::Lenient => match envelope.metadata() {
                    Ok(meta) if meta.is_standard_chain() => {
                        tracing::debug!("non-standard metadata line: {:?}", envelope.metadata);
                    },
                    _ => {
                        tracing::warn!(
                            "ignoring metadata line {:?}, decoding as gz>b64",
                            envelope.metadata
                        );
                    },
                },
            }
        }

        let compressed = BASE64.decode(&envelope.payload)?;
        let data = self.gzip.decompress_bytes(&compressed)?;

        tracing::debug!(
            payload = envelope.payload.len(),
            decoded = data.len(),
            "decoded envelope"
        );
        Ok(data)
    }
}

/// Encode bytes with the default codec.
pub fn encode(data: &[u8]) -> Result<String> {
    EnvelopeCodec::new().encode(data)
}

/// Decode envelope text with the default (lenient) codec.
pub fn decode(text: &str) -> std::result::Result<Vec<u8>, FormatError> {
    EnvelopeCodec::new().decode(text)
}
