// Gitstr Auth: Encrypted key primitive

use nostr::nips::nip19::FromBech32;
use nostr::nips::nip49::EncryptedSecretKey;
use thiserror::Error;

use crate::secret::PlainKey;

/// A failed decryption. Wrong passphrases and corrupt blobs are both plain
/// errors; callers cannot and need not tell them apart.
#[derive(Debug, Error)]
#[error("decryption failed: {0}")]
pub struct DecryptError(pub String);

/// Abstraction over the passphrase decryption primitive, enabling the NIP-49
/// implementation in production and counting doubles in tests.
pub trait KeyDecryptor {
    fn decrypt(&self, ncryptsec: &str, passphrase: &str) -> Result<PlainKey, DecryptError>;
}

impl<D: KeyDecryptor + ?Sized> KeyDecryptor for &D {
    fn decrypt(&self, ncryptsec: &str, passphrase: &str) -> Result<PlainKey, DecryptError> {
        (**self).decrypt(ncryptsec, passphrase)
    }
}

/// NIP-49 (scrypt + XChaCha20-Poly1305) decryption via the `nostr` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct Nip49Decryptor;

impl KeyDecryptor for Nip49Decryptor {
    fn decrypt(&self, ncryptsec: &str, passphrase: &str) -> Result<PlainKey, DecryptError> {
        let encrypted = EncryptedSecretKey::from_bech32(ncryptsec)
            .map_err(|e| DecryptError(e.to_string()))?;
        let secret = encrypted
            .to_secret_key(passphrase)
            .map_err(|e| DecryptError(e.to_string()))?;
        PlainKey::from_hex(&secret.to_secret_hex()).map_err(|e| DecryptError(e.to_string()))
    }
}

// ─── Test Double ─────────────────────────────────────────────────────────────

/// A decryptor that accepts a single passphrase and counts calls.
#[cfg(test)]
pub mod mock {
    use super::*;
    use std::cell::Cell;

    pub struct MockDecryptor {
        passphrase: String,
        key: PlainKey,
        calls: Cell<usize>,
    }

    impl MockDecryptor {
        pub fn new(passphrase: &str, key_hex: &str) -> Self {
            Self {
                passphrase: passphrase.to_string(),
                key: PlainKey::from_hex(key_hex).unwrap(),
                calls: Cell::new(0),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.get()
        }
    }

    impl KeyDecryptor for MockDecryptor {
        fn decrypt(&self, _ncryptsec: &str, passphrase: &str) -> Result<PlainKey, DecryptError> {
            self.calls.set(self.calls.get() + 1);
            if passphrase == self.passphrase {
                Ok(self.key.clone())
            } else {
                Err(DecryptError("wrong passphrase".to_string()))
            }
        }
    }
}
