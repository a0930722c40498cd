// Gitstr Auth: Secret Validator
//
// Pure classification and normalization of user-supplied secret material.
// A secret arrives in one of three encodings (raw hex, bech32 `nsec`, or
// NIP-49 `ncryptsec`) and is classified once into `SecretFormat`; every
// caller then matches on the variant instead of re-checking prefixes.

mod error;
mod key;
mod validate;

pub use error::SecretError;
pub use key::PlainKey;
pub use validate::{
    classify, decode_nsec, encode_nsec, is_32_byte_hex, is_bech32_encrypted, is_bech32_plain,
    parse_secret, ParsedSecret, SecretFormat, ENCRYPTED_PREFIX, PLAIN_PREFIX,
};
