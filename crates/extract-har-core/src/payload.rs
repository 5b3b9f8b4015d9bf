//! Response body decoding: HAR `content.text` plus `content.encoding` to raw bytes.

use base64::alphabet;
use base64::engine::general_purpose::GeneralPurposeConfig;
use base64::engine::{DecodePaddingMode, GeneralPurpose};
use base64::Engine;

use crate::error::PayloadError;

/// Encoding tag assumed when `content.encoding` is absent.
pub const DEFAULT_ENCODING: &str = "literal";

/// Supported `content.encoding` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Text is the body itself.
    Literal,
    /// Text is standard-alphabet base64.
    Base64,
}

impl Encoding {
    /// Parses a HAR encoding tag. `None` means the field was absent.
    pub fn from_tag(tag: Option<&str>) -> Result<Self, PayloadError> {
        match tag.unwrap_or(DEFAULT_ENCODING) {
            "literal" => Ok(Encoding::Literal),
            "base64" => Ok(Encoding::Base64),
            other => Err(PayloadError::UnsupportedEncoding(other.to_string())),
        }
    }
}

/// Standard alphabet, padding optional, stray low bits in the final symbol ignored.
const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Decodes a response body into owned bytes.
///
/// Literal bodies are returned as their UTF-8 bytes. Base64 bodies are decoded
/// leniently (see [`decode_base64_lenient`]); the result length is whatever the
/// input yields and is never checked against the HAR size fields.
pub fn decode(text: &str, encoding: Option<&str>) -> Result<Vec<u8>, PayloadError> {
    match Encoding::from_tag(encoding)? {
        Encoding::Literal => Ok(text.as_bytes().to_vec()),
        Encoding::Base64 => Ok(decode_base64_lenient(text)),
    }
}

/// Base64 decode that tolerates garbage instead of failing.
///
/// Characters outside the standard alphabet (padding, whitespace, line breaks,
/// stray bytes) are skipped. A single leftover symbol at the end cannot form a
/// byte and is dropped.
pub fn decode_base64_lenient(text: &str) -> Vec<u8> {
    let mut symbols: Vec<u8> = text
        .bytes()
        .filter(|b| b.is_ascii_alphanumeric() || *b == b'+' || *b == b'/')
        .collect();
    if symbols.len() % 4 == 1 {
        symbols.pop();
    }
    // Only alphabet symbols remain and the length is never 1 mod 4, so the
    // engine has nothing left to reject.
    LENIENT_STANDARD.decode(&symbols).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::prelude::BASE64_STANDARD;

    #[test]
    fn literal_is_identity() {
        assert_eq!(decode("hello", None).unwrap(), b"hello");
        assert_eq!(decode("<svg/>", Some("literal")).unwrap(), b"<svg/>");
        assert_eq!(decode("", None).unwrap(), b"");
        assert_eq!(decode("héllo", None).unwrap(), "héllo".as_bytes());
    }

    #[test]
    fn base64_three_bytes() {
        assert_eq!(decode("AQID", Some("base64")).unwrap(), vec![1u8, 2, 3]);
    }

    #[test]
    fn base64_round_trips_well_formed_input() {
        let raw: Vec<u8> = (0u8..=255).collect();
        let text = BASE64_STANDARD.encode(&raw);
        let decoded = decode(&text, Some("base64")).unwrap();
        assert_eq!(decoded, raw);
        assert_eq!(BASE64_STANDARD.encode(&decoded), text);
    }

    #[test]
    fn base64_accepts_missing_padding_and_line_breaks() {
        assert_eq!(decode("aGVsbG8", Some("base64")).unwrap(), b"hello");
        assert_eq!(decode("aGVs\r\nbG8=", Some("base64")).unwrap(), b"hello");
    }

    #[test]
    fn base64_drops_malformed_tail() {
        // "AQID" + one dangling symbol.
        assert_eq!(decode("AQIDB", Some("base64")).unwrap(), vec![1u8, 2, 3]);
        assert_eq!(decode("AQID!!", Some("base64")).unwrap(), vec![1u8, 2, 3]);
        assert!(decode("%%%", Some("base64")).unwrap().is_empty());
    }

    #[test]
    fn base64_never_fails_on_content() {
        for text in ["", "A", "AB", "ABC", "ABCD=", "====", "A=B=C=D", "AB\u{0}CD", "Zm9v!YmFy?"] {
            assert!(decode(text, Some("base64")).is_ok(), "input {text:?}");
        }
        assert_eq!(decode_base64_lenient("Zm9v!YmFy?"), b"foobar");
        assert!(decode_base64_lenient("A").is_empty());
    }

    #[test]
    fn unknown_encoding_is_rejected() {
        let err = decode("x", Some("gzip")).unwrap_err();
        assert!(matches!(err, PayloadError::UnsupportedEncoding(ref e) if e == "gzip"));
        assert!(decode("x", Some("Base64")).is_err());
        assert!(decode("x", Some("")).is_err());
    }

    #[test]
    fn encoding_tags() {
        assert_eq!(Encoding::from_tag(None).unwrap(), Encoding::Literal);
        assert_eq!(Encoding::from_tag(Some("base64")).unwrap(), Encoding::Base64);
    }
}
