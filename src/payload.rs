//! Request payload descriptors.

use bytes::Bytes;

use crate::constants::UNSIGNED_PAYLOAD;
use crate::hash::base64_md5;
use crate::hash::hex_sha256;

/// Describes the body of the request being signed.
///
/// Signing never needs the body itself, only its hash and size, so
/// streaming uploads can opt out of payload hashing via
/// [`Payload::Unsigned`].
#[derive(Debug, Clone, Default)]
pub enum Payload {
    /// The body is fully available.
    Bytes(Bytes),
    /// There is no body.
    #[default]
    Empty,
    /// The body is not hashed, e.g. for streaming uploads.
    Unsigned,
}

impl Payload {
    /// Hash of the payload as placed in the canonical request.
    pub fn hash(&self) -> String {
        match self {
            Payload::Bytes(bs) => hex_sha256(bs),
            Payload::Empty => hex_sha256(&[]),
            Payload::Unsigned => UNSIGNED_PAYLOAD.to_string(),
        }
    }

    /// Size of the payload for the `Content-Length` header.
    ///
    /// Unsigned payloads have no known size and render as the
    /// sentinel used by the hash.
    pub fn size(&self) -> String {
        match self {
            Payload::Bytes(bs) => bs.len().to_string(),
            Payload::Empty => "0".to_string(),
            Payload::Unsigned => UNSIGNED_PAYLOAD.to_string(),
        }
    }

    /// Base64 MD5 of the payload for the `Content-MD5` header.
    pub fn md5(&self) -> Option<String> {
        match self {
            Payload::Bytes(bs) => Some(base64_md5(bs)),
            _ => None,
        }
    }

    /// Whether the payload hash is a real digest rather than a sentinel.
    pub fn is_concrete(&self) -> bool {
        !matches!(self, Payload::Unsigned)
    }
}

impl From<Bytes> for Payload {
    fn from(bs: Bytes) -> Self {
        Payload::Bytes(bs)
    }
}

impl From<Vec<u8>> for Payload {
    fn from(bs: Vec<u8>) -> Self {
        Payload::Bytes(Bytes::from(bs))
    }
}

impl From<&'static str> for Payload {
    fn from(s: &'static str) -> Self {
        Payload::Bytes(Bytes::from_static(s.as_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_hash_is_sha256_of_nothing() {
        assert_eq!(
            Payload::Empty.hash(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(Payload::Empty.size(), "0");
        assert_eq!(Payload::Empty.md5(), None);
    }

    #[test]
    fn test_bytes_payload() {
        let payload = Payload::from("Welcome to Amazon S3.");
        assert_eq!(
            payload.hash(),
            "44ce7dd67c959e0d3524ffac1771dfbba87d2b6b4b4e99e42034a8b803f8b072"
        );
        assert_eq!(payload.size(), "21");
        assert!(payload.is_concrete());
    }

    #[test]
    fn test_unsigned_sentinel() {
        assert_eq!(Payload::Unsigned.hash(), "UNSIGNED-PAYLOAD");
        assert_eq!(Payload::Unsigned.size(), "UNSIGNED-PAYLOAD");
        assert!(!Payload::Unsigned.is_concrete());
    }
}
