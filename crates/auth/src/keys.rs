//! Signing-key material.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use jsonwebtoken::{DecodingKey, EncodingKey};

use crate::error::AuthError;

/// Minimum key length for HMAC-SHA256 (256 bits).
pub const MIN_KEY_BYTES: usize = 32;

/// Shared secret used to sign and verify tokens.
///
/// Loaded once at process start and immutable afterwards; reads need no
/// synchronization. The `Debug` impl never prints key bytes.
#[derive(Clone)]
pub struct SigningKey {
    bytes: Vec<u8>,
}

impl SigningKey {
    /// Decode a base64-encoded secret (the configured form).
    pub fn from_base64(encoded: &str) -> Result<Self, AuthError> {
        let bytes = BASE64
            .decode(encoded.trim())
            .map_err(|e| AuthError::invalid_key(format!("base64 decode failed: {e}")))?;
        Self::from_bytes(bytes)
    }

    /// Wrap raw secret bytes, enforcing the HMAC-SHA256 minimum length.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Result<Self, AuthError> {
        let bytes = bytes.into();
        if bytes.len() < MIN_KEY_BYTES {
            return Err(AuthError::invalid_key(format!(
                "key is {} bytes; HMAC-SHA256 requires at least {}",
                bytes.len(),
                MIN_KEY_BYTES
            )));
        }
        Ok(Self { bytes })
    }

    pub fn encoding_key(&self) -> EncodingKey {
        EncodingKey::from_secret(&self.bytes)
    }

    pub fn decoding_key(&self) -> DecodingKey {
        DecodingKey::from_secret(&self.bytes)
    }
}

impl core::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "SigningKey({} bytes)", self.bytes.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;

    #[test]
    fn undersized_key_is_rejected() {
        let encoded = BASE64.encode([0u8; 8]);
        let err = SigningKey::from_base64(&encoded).unwrap_err();
        assert!(matches!(err, AuthError::InvalidKey { .. }));
    }

    #[test]
    fn thirty_two_byte_key_is_accepted() {
        let encoded = BASE64.encode([7u8; 32]);
        assert!(SigningKey::from_base64(&encoded).is_ok());
    }

    #[test]
    fn malformed_base64_is_rejected() {
        let err = SigningKey::from_base64("not!!valid!!base64").unwrap_err();
        assert!(matches!(err, AuthError::InvalidKey { .. }));
    }

    #[test]
    fn debug_does_not_leak_key_material() {
        let key = SigningKey::from_bytes(vec![42u8; 32]).unwrap();
        let rendered = format!("{key:?}");
        assert_eq!(rendered, "SigningKey(32 bytes)");
    }
}
