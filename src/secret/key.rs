// Gitstr Auth: Plain secret key
//
// A 32-byte secret held as normalized lowercase hex. The buffer is wiped on
// drop and never shows up in `Debug` output.

use std::fmt;

use nostr::{Keys, PublicKey, SecretKey};
use zeroize::Zeroizing;

use super::validate::is_32_byte_hex;
use super::SecretError;

#[derive(Clone, PartialEq, Eq)]
pub struct PlainKey(Zeroizing<String>);

impl PlainKey {
    /// Accept 64 hex characters in either case; stored lowercased.
    pub fn from_hex(hex: &str) -> Result<Self, SecretError> {
        if !is_32_byte_hex(hex) {
            return Err(SecretError::InvalidSecretKey);
        }
        Ok(Self(Zeroizing::new(hex.to_ascii_lowercase())))
    }

    pub fn as_hex(&self) -> &str {
        &self.0
    }

    /// Signing keys for this secret. Fails for hex that is not a valid
    /// secp256k1 scalar (zero, or not below the curve order).
    pub fn keys(&self) -> Result<Keys, SecretError> {
        let secret = SecretKey::from_hex(self.as_hex())
            .map_err(|e| SecretError::Unusable(e.to_string()))?;
        Ok(Keys::new(secret))
    }

    pub fn public_key(&self) -> Result<PublicKey, SecretError> {
        Ok(self.keys()?.public_key())
    }
}

impl fmt::Debug for PlainKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PlainKey([REDACTED])")
    }
}
