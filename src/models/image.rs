use base64::Engine;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, StyleError};

/// Mime type assumed when a payload does not declare one.
pub const FALLBACK_MIME_TYPE: &str = "image/jpeg";

static MIME_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^data:(image/[A-Za-z0-9_]+);base64,").expect("valid mime prefix pattern")
});

// Only these formats get their prefix stripped before upload.
static STRIPPABLE_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^data:image/(png|jpeg|jpg|webp);base64,").expect("valid strip pattern")
});

/// Result of reading the mime type out of a data URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclaredMime<'a> {
    Declared(&'a str),
    /// No `data:image/<type>;base64,` prefix. Callers fall back to
    /// [`FALLBACK_MIME_TYPE`] instead of rejecting the payload.
    Undeclared,
}

/// An image carried as a `data:<mime>;base64,<bytes>` string.
///
/// Parsing is lenient: malformed input is kept as-is and handed to the
/// model, which is the one that decides whether it is a usable image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImagePayload(String);

impl ImagePayload {
    pub fn new(data_uri: impl Into<String>) -> Self {
        Self(data_uri.into())
    }

    pub fn from_base64(mime_type: &str, data: &str) -> Self {
        Self(format!("data:{};base64,{}", mime_type, data))
    }

    pub fn from_bytes(mime_type: &str, bytes: &[u8]) -> Self {
        let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
        Self::from_base64(mime_type, &encoded)
    }

    /// Builds a payload from raw file bytes, guessing the mime type from magic bytes.
    pub fn from_bytes_sniffed(bytes: &[u8]) -> Self {
        Self::from_bytes(sniff_mime_type(bytes), bytes)
    }

    pub fn declared_mime(&self) -> DeclaredMime<'_> {
        match MIME_PREFIX.captures(&self.0).and_then(|caps| caps.get(1)) {
            Some(m) => DeclaredMime::Declared(m.as_str()),
            None => DeclaredMime::Undeclared,
        }
    }

    pub fn mime_type(&self) -> &str {
        match self.declared_mime() {
            DeclaredMime::Declared(mime) => mime,
            DeclaredMime::Undeclared => FALLBACK_MIME_TYPE,
        }
    }

    /// The base64 body with a png/jpeg/jpg/webp data-URI prefix removed.
    /// Anything else is returned untouched.
    pub fn base64_payload(&self) -> &str {
        match STRIPPABLE_PREFIX.find(&self.0) {
            Some(m) => &self.0[m.end()..],
            None => &self.0,
        }
    }

    pub fn decode_bytes(&self) -> Result<Vec<u8>> {
        base64::engine::general_purpose::STANDARD
            .decode(self.base64_payload())
            .map_err(|e| StyleError::ImageError(format!("Invalid base64 payload: {}", e)))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ImagePayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ImagePayload {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Guess the mime type of an image from its magic bytes.
pub fn sniff_mime_type(data: &[u8]) -> &'static str {
    if data.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
        "image/png"
    } else if data.starts_with(&[0xFF, 0xD8]) {
        "image/jpeg"
    } else if data.starts_with(b"GIF") {
        "image/gif"
    } else if data.starts_with(b"RIFF") && data.len() >= 12 && &data[8..12] == b"WEBP" {
        "image/webp"
    } else {
        FALLBACK_MIME_TYPE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_mime_type() {
        let png = ImagePayload::new("data:image/png;base64,iVBORw0KGgo=");
        assert_eq!(png.declared_mime(), DeclaredMime::Declared("image/png"));
        assert_eq!(png.mime_type(), "image/png");

        let webp = ImagePayload::new("data:image/webp;base64,UklGRg==");
        assert_eq!(webp.mime_type(), "image/webp");
    }

    #[test]
    fn test_undeclared_mime_falls_back_to_jpeg() {
        let raw = ImagePayload::new("/9j/4AAQSkZJRgABAQ==");
        assert_eq!(raw.declared_mime(), DeclaredMime::Undeclared);
        assert_eq!(raw.mime_type(), FALLBACK_MIME_TYPE);

        let not_an_image = ImagePayload::new("data:text/plain;base64,aGVsbG8=");
        assert_eq!(not_an_image.declared_mime(), DeclaredMime::Undeclared);
        assert_eq!(not_an_image.mime_type(), "image/jpeg");
    }

    #[test]
    fn test_strip_prefix_round_trip() {
        for uri in [
            "data:image/png;base64,Zm9vYmFy",
            "data:image/jpeg;base64,/9j/4AAQ",
            "data:image/jpg;base64,/9j/4AAQ",
            "data:image/webp;base64,UklGRg==",
        ] {
            let payload = ImagePayload::new(uri);
            let stripped = payload.base64_payload();
            assert!(!stripped.starts_with("data:"));
            assert_eq!(
                ImagePayload::from_base64(payload.mime_type(), stripped).as_str(),
                uri
            );
        }
    }

    #[test]
    fn test_strip_leaves_unknown_prefix_untouched() {
        let raw = ImagePayload::new("Zm9vYmFy");
        assert_eq!(raw.base64_payload(), "Zm9vYmFy");

        // gif declares a mime type but is not in the strippable set
        let gif = ImagePayload::new("data:image/gif;base64,R0lGOD");
        assert_eq!(gif.mime_type(), "image/gif");
        assert_eq!(gif.base64_payload(), "data:image/gif;base64,R0lGOD");
    }

    #[test]
    fn test_from_bytes_sniffed() {
        let png = ImagePayload::from_bytes_sniffed(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A]);
        assert_eq!(png.mime_type(), "image/png");
        assert_eq!(
            png.decode_bytes().unwrap(),
            vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A]
        );

        let unknown = ImagePayload::from_bytes_sniffed(b"not an image");
        assert_eq!(unknown.mime_type(), "image/jpeg");
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let payload = ImagePayload::new("data:image/png;base64,@@@");
        assert!(matches!(
            payload.decode_bytes(),
            Err(StyleError::ImageError(_))
        ));
    }
}
