// Gitstr Auth: Secret error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SecretError {
    #[error("invalid nsec: {0}")]
    InvalidNsec(String),

    #[error("invalid secret key")]
    InvalidSecretKey,

    #[error("secret key cannot be used for signing: {0}")]
    Unusable(String),

    #[error("failed to encode key: {0}")]
    Encode(String),
}
