//! End-to-end envelope codec tests.
//!
//! These tests exercise the public API the way a caller would: encode,
//! hand the text around, decode, and check rejections of malformed input.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use ecv1::codec::{Metadata, Transform};
use ecv1::io::write_to;
use ecv1::{decode, encode, Envelope, EnvelopeCodec, FormatError, MetadataPolicy};
use proptest::prelude::*;

proptest! {
    /// decode(encode(d)) == d for arbitrary bytes
    #[test]
    fn prop_roundtrip(data in proptest::collection::vec(any::<u8>(), 0..4096)) {
        let wire = encode(&data).unwrap();
        prop_assert_eq!(decode(&wire).unwrap(), data);
    }

    /// Any first line other than the magic is rejected
    #[test]
    fn prop_bad_header_rejected(header in "[^\r\n]{0,16}") {
        prop_assume!(header != "EC v1");
        let wire = encode(b"payload").unwrap();
        let tampered = wire.replacen("EC v1", &header, 1);
        prop_assert_eq!(decode(&tampered), Err(FormatError::BadHeader));
    }

    /// Every level produces an envelope the default decoder accepts
    #[test]
    fn prop_any_level_decodes(level in 0u32..=9, data in proptest::collection::vec(any::<u8>(), 0..512)) {
        let wire = EnvelopeCodec::new().with_level(level).encode(&data).unwrap();
        prop_assert_eq!(decode(&wire).unwrap(), data);
    }
}

/// Empty input produces the three documented lines and decodes to nothing
#[test]
fn test_empty_envelope() {
    let wire = encode(&[]).unwrap();
    let lines: Vec<&str> = wire.split('\n').collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "EC v1");
    assert_eq!(lines[1], "t=gz>b64;ct=json");

    let gz = BASE64.decode(lines[2]).unwrap();
    assert_eq!(&gz[..3], &[0x1f, 0x8b, 0x08]);

    assert_eq!(decode(&wire).unwrap(), Vec::<u8>::new());
}

/// "hello world" survives a round trip byte for byte
#[test]
fn test_hello_world_roundtrip() {
    let wire = encode(b"hello world").unwrap();
    let decoded = decode(&wire).unwrap();
    assert_eq!(decoded.len(), 11);
    assert_eq!(decoded, b"hello world");
}

/// Stdout gets a newline, files do not
#[test]
fn test_output_newline_asymmetry() {
    let decoded = decode(&encode(b"abc").unwrap()).unwrap();

    let mut stdout = Vec::new();
    write_to(&mut stdout, &decoded, true).unwrap();
    assert_eq!(stdout, b"abc\n");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    ecv1::io::write_output(&ecv1::Destination::File(path.clone()), &decoded).unwrap();
    assert_eq!(std::fs::read(path).unwrap(), b"abc");
}

/// Envelopes that went through a Windows editor still decode
#[test]
fn test_crlf_envelope() {
    let wire = encode(b"line endings").unwrap().replace('\n', "\r\n") + "\r\n";
    assert_eq!(decode(&wire).unwrap(), b"line endings");
}

/// Envelope followed by a trailing newline still decodes
#[test]
fn test_trailing_newline() {
    let wire = encode(b"{\"a\":1}").unwrap() + "\n";
    assert_eq!(decode(&wire).unwrap(), b"{\"a\":1}");
}

/// Rejections, in validation order
#[test]
fn test_rejections() {
    assert_eq!(decode(""), Err(FormatError::TooFewLines));
    assert_eq!(decode("EC v1\nt=gz>b64;ct=json"), Err(FormatError::TooFewLines));
    assert_eq!(
        decode("EC v2\nt=gz>b64;ct=json\nAAAA"),
        Err(FormatError::BadHeader)
    );
    assert_eq!(
        decode("EC v1\nt=gz>b64;ct=json\nnot*base64"),
        Err(FormatError::BadBase64)
    );

    let not_gzip = BASE64.encode(b"{\"plain\":\"json\"}");
    assert_eq!(
        decode(&format!("EC v1\nt=gz>b64;ct=json\n{not_gzip}")),
        Err(FormatError::BadCompressedStream)
    );
}

/// A truncated payload is a corrupt stream, not a base64 error
#[test]
fn test_truncated_stream() {
    let wire = encode(&b"truncate me ".repeat(50)).unwrap();
    let envelope = Envelope::parse(&wire).unwrap();
    let mut gz = BASE64.decode(&envelope.payload).unwrap();
    gz.truncate(gz.len() / 2);

    let tampered = Envelope {
        payload: BASE64.encode(&gz),
        ..envelope
    };
    assert_eq!(
        decode(&tampered.to_string()),
        Err(FormatError::BadCompressedStream)
    );
}

/// Lenient by default, strict on request
#[test]
fn test_metadata_policies() {
    let wire = encode(b"{}").unwrap().replace("ct=json", "ct=text");
    assert_eq!(decode(&wire).unwrap(), b"{}");

    let strict = EnvelopeCodec::new().with_policy(MetadataPolicy::Strict);
    assert_eq!(strict.decode(&wire), Err(FormatError::BadMetadata));
}

/// The metadata line written by the encoder parses to gzip then base64
#[test]
fn test_metadata_inspection() {
    let envelope = Envelope::parse(&encode(b"{}").unwrap()).unwrap();
    let meta: Metadata = envelope.metadata().unwrap();
    assert_eq!(meta.transforms, vec![Transform::Gzip, Transform::Base64]);
    assert!(meta.is_json());
}
