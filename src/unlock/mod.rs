// Gitstr Auth: Decryption Retry Loop
//
// Unlocks a NIP-49 encrypted secret key by asking for its passphrase, with a
// fixed number of attempts. Wrong passphrases all look the same to the user.

mod decryptor;
mod error;
mod retry;

pub use decryptor::{DecryptError, KeyDecryptor, Nip49Decryptor};
pub use error::UnlockError;
pub use retry::{decrypt_with_prompt, MAX_DECRYPT_ATTEMPTS};

#[cfg(test)]
pub use decryptor::mock;
