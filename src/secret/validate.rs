// Gitstr Auth: Secret format classification

use nostr::nips::nip19::{FromBech32, ToBech32};
use nostr::SecretKey;

use super::{PlainKey, SecretError};

/// Human-readable prefix of a bech32 plain secret key (NIP-19).
pub const PLAIN_PREFIX: &str = "nsec1";

/// Human-readable prefix of a bech32 passphrase-encrypted secret key (NIP-49).
pub const ENCRYPTED_PREFIX: &str = "ncryptsec1";

/// The encoding a candidate secret string is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretFormat {
    Hex,
    Bech32Plain,
    Bech32Encrypted,
    Invalid,
}

impl SecretFormat {
    /// Plain forms expose the key directly and need confirmation before storing.
    pub fn is_plain(self) -> bool {
        matches!(self, SecretFormat::Hex | SecretFormat::Bech32Plain)
    }
}

/// A secret string after classification and, for plain forms, decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedSecret {
    Plain { key: PlainKey, format: SecretFormat },
    Encrypted(String),
}

/// True iff `s` is exactly 32 bytes of hex (64 characters, either case).
pub fn is_32_byte_hex(s: &str) -> bool {
    s.len() == 64 && hex::decode(s).is_ok()
}

pub fn is_bech32_plain(s: &str) -> bool {
    s.starts_with(PLAIN_PREFIX)
}

pub fn is_bech32_encrypted(s: &str) -> bool {
    s.starts_with(ENCRYPTED_PREFIX)
}

/// Classify by format alone. At most one predicate can hold: the two bech32
/// prefixes differ and neither is valid hex.
pub fn classify(s: &str) -> SecretFormat {
    if is_bech32_encrypted(s) {
        SecretFormat::Bech32Encrypted
    } else if is_bech32_plain(s) {
        SecretFormat::Bech32Plain
    } else if is_32_byte_hex(s) {
        SecretFormat::Hex
    } else {
        SecretFormat::Invalid
    }
}

/// Decode an `nsec1…` string into its hex secret.
pub fn decode_nsec(nsec: &str) -> Result<PlainKey, SecretError> {
    let secret = SecretKey::from_bech32(nsec).map_err(|e| SecretError::InvalidNsec(e.to_string()))?;
    PlainKey::from_hex(&secret.to_secret_hex())
}

pub fn encode_nsec(key: &PlainKey) -> Result<String, SecretError> {
    let secret =
        SecretKey::from_hex(key.as_hex()).map_err(|e| SecretError::Encode(e.to_string()))?;
    secret
        .to_bech32()
        .map_err(|e| SecretError::Encode(e.to_string()))
}

/// Classify `s` and decode plain forms. Encrypted blobs are returned as-is;
/// their integrity is only checked when decrypting.
pub fn parse_secret(s: &str) -> Result<ParsedSecret, SecretError> {
    match classify(s) {
        SecretFormat::Bech32Encrypted => Ok(ParsedSecret::Encrypted(s.to_string())),
        SecretFormat::Bech32Plain => Ok(ParsedSecret::Plain {
            key: decode_nsec(s)?,
            format: SecretFormat::Bech32Plain,
        }),
        SecretFormat::Hex => Ok(ParsedSecret::Plain {
            key: PlainKey::from_hex(s)?,
            format: SecretFormat::Hex,
        }),
        SecretFormat::Invalid => Err(SecretError::InvalidSecretKey),
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
