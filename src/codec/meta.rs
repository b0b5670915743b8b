//! Envelope metadata (header line 2).
//!
//! The metadata line declares the transform chain applied to the original
//! bytes and a content-type label:
//!
//! ```text
//! t=gz>b64;ct=json
//! ```
//!
//! Parts are `;`-separated `key=value` pairs. Unknown keys are ignored.

use crate::error::FormatError;

/// Metadata line written by the encoder.
pub const DEFAULT_METADATA: &str = "t=gz>b64;ct=json";

/// A single step of the transform chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    /// gzip container (`gz`)
    Gzip,
    /// Standard padded base64 (`b64`)
    Base64,
    /// No-op step (`none`)
    Identity,
}

impl Transform {
    /// Wire tag of this step
    pub fn tag(&self) -> &'static str {
        match self {
            Transform::Gzip => "gz",
            Transform::Base64 => "b64",
            Transform::Identity => "none",
        }
    }

    /// Parse a wire tag
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "gz" => Some(Transform::Gzip),
            "b64" => Some(Transform::Base64),
            "none" => Some(Transform::Identity),
            _ => None,
        }
    }
}

impl std::fmt::Display for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Declared content type (`ct=`)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ContentType {
    /// JSON document
    #[default]
    Json,
    /// Any other label, kept verbatim
    Other(String),
}

impl ContentType {
    /// Label as written on the wire
    pub fn label(&self) -> &str {
        match self {
            ContentType::Json => "json",
            ContentType::Other(label) => label,
        }
    }

    fn from_label(label: &str) -> Self {
        if label == "json" {
            ContentType::Json
        } else {
            ContentType::Other(label.to_string())
        }
    }
}

/// Parsed metadata line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    /// Transform chain, in the order applied by the encoder
    pub transforms: Vec<Transform>,
    /// Content type
    pub content_type: ContentType,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            transforms: vec![Transform::Gzip, Transform::Base64],
            content_type: ContentType::Json,
        }
    }
}

impl Metadata {
    /// Parse a metadata line.
    ///
    /// Fails with [`FormatError::BadMetadata`] when `t=` is missing or names
    /// an unknown step. Empty steps (`t=gz>>b64`) are skipped. A missing
    /// `ct=` defaults to JSON.
    pub fn parse(line: &str) -> Result<Self, FormatError> {
        let mut chain = None;
        let mut content_type = ContentType::Json;

        for part in line.split(';') {
            if let Some(value) = part.strip_prefix("t=") {
                chain = Some(value);
            } else if let Some(value) = part.strip_prefix("ct=") {
                content_type = ContentType::from_label(value);
            }
        }

        let chain = chain.ok_or(FormatError::BadMetadata)?;
        let transforms = chain
            .split('>')
            .filter(|step| !step.is_empty())
            .map(|step| Transform::from_tag(step).ok_or(FormatError::BadMetadata))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            transforms,
            content_type,
        })
    }

    /// Whether this is the chain the codec actually implements (`gz>b64`).
    pub fn is_standard_chain(&self) -> bool {
        let steps: Vec<Transform> = self
            .transforms
            .iter()
            .copied()
            .filter(|t| *t != Transform::Identity)
            .collect();
        steps == [Transform::Gzip, Transform::Base64]
    }

    /// Whether the payload is declared as JSON
    pub fn is_json(&self) -> bool {
        self.content_type == ContentType::Json
    }
}

impl std::fmt::Display for Metadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let chain: Vec<&str> = self.transforms.iter().map(Transform::tag).collect();
        write!(f, "t={};ct={}", chain.join(">"), self.content_type.label())
    }
}
