//! EC v1 envelope text layout.
//!
//! ```text
//! EC v1
//! t=gz>b64;ct=json
//! <base64 payload>
//! ```
//!
//! Lines are joined with `\n` and no trailing newline is written. On read,
//! `\n` and `\r\n` terminators are both accepted, a final terminator does not
//! count as an extra line, and anything after the third line is ignored.

use super::meta::{Metadata, DEFAULT_METADATA};
use crate::error::FormatError;

/// Magic first line
pub const MAGIC: &str = "EC v1";

/// Envelope split into its header and payload lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    /// Line 2, verbatim
    pub metadata: String,
    /// Line 3, base64 text
    pub payload: String,
}

impl Envelope {
    /// Wrap a base64 payload with the default metadata line
    pub fn new(payload: String) -> Self {
        Self {
            metadata: DEFAULT_METADATA.to_string(),
            payload,
        }
    }

    /// Split envelope text into lines and check the line count and magic.
    ///
    /// Line 2 is kept verbatim and not interpreted here.
    pub fn parse(text: &str) -> Result<Self, FormatError> {
        let mut lines = text.lines();
        let (Some(magic), Some(metadata), Some(payload)) =
            (lines.next(), lines.next(), lines.next())
        else {
            return Err(FormatError::TooFewLines);
        };

        if magic != MAGIC {
            return Err(FormatError::BadHeader);
        }

        Ok(Self {
            metadata: metadata.to_string(),
            payload: payload.to_string(),
        })
    }

    /// Parsed view of the metadata line
    pub fn metadata(&self) -> Result<Metadata, FormatError> {
        Metadata::parse(&self.metadata)
    }

    /// Whether line 2 is exactly the line the encoder writes
    pub fn has_default_metadata(&self) -> bool {
        self.metadata == DEFAULT_METADATA
    }
}

impl std::fmt::Display for Envelope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{MAGIC}\n{}\n{}", self.metadata, self.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        let envelope = Envelope::new("AAAA".to_string());
        assert_eq!(envelope.to_string(), "EC v1\nt=gz>b64;ct=json\nAAAA");
    }

    #[test]
    fn test_parse_render_agree() {
        let text = "EC v1\nt=gz>b64;ct=json\nAAAA";
        let envelope = Envelope::parse(text).unwrap();
        assert_eq!(envelope.payload, "AAAA");
        assert!(envelope.has_default_metadata());
        assert_eq!(envelope.to_string(), text);
    }

    #[test]
    fn test_parse_crlf_and_trailing_newline() {
        let envelope = Envelope::parse("EC v1\r\nt=gz>b64;ct=json\r\nAAAA\r\n").unwrap();
        assert_eq!(envelope.metadata, DEFAULT_METADATA);
        assert_eq!(envelope.payload, "AAAA");
    }

    #[test]
    fn test_extra_lines_ignored() {
        let envelope = Envelope::parse("EC v1\nmeta\nAAAA\nleftover\n").unwrap();
        assert_eq!(envelope.payload, "AAAA");
    }

    #[test]
    fn test_blank_line_counts_as_line() {
        let envelope = Envelope::parse("EC v1\n\nt=gz>b64;ct=json\nAAAA").unwrap();
        assert_eq!(envelope.metadata, "");
        assert_eq!(envelope.payload, "t=gz>b64;ct=json");
    }

    #[test]
    fn test_too_few_lines() {
        assert_eq!(Envelope::parse(""), Err(FormatError::TooFewLines));
        assert_eq!(Envelope::parse("EC v1"), Err(FormatError::TooFewLines));
        assert_eq!(
            Envelope::parse("EC v1\nt=gz>b64;ct=json\n"),
            Err(FormatError::TooFewLines)
        );
    }

    #[test]
    fn test_line_count_checked_before_header() {
        assert_eq!(Envelope::parse("nope\nx"), Err(FormatError::TooFewLines));
    }

    #[test]
    fn test_bad_header() {
        assert_eq!(
            Envelope::parse("EC v2\nt=gz>b64;ct=json\nAAAA"),
            Err(FormatError::BadHeader)
        );
        assert_eq!(
            Envelope::parse(" EC v1\nt=gz>b64;ct=json\nAAAA"),
            Err(FormatError::BadHeader)
        );
    }

    #[test]
    fn test_lenient_metadata_kept_verbatim() {
        let envelope = Envelope::parse("EC v1\nwhatever\nAAAA").unwrap();
        assert_eq!(envelope.metadata, "whatever");
        assert!(!envelope.has_default_metadata());
        assert_eq!(envelope.metadata(), Err(FormatError::BadMetadata));
    }
}
