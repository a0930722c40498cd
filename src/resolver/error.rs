// Gitstr Auth: Resolver error types

use thiserror::Error;

use crate::bunker::BunkerError;
use crate::prompt::PromptError;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("no bunker reachable: {0}")]
    Connection(#[from] BunkerError),

    #[error("bunker connection cancelled")]
    Cancelled,

    #[error("couldn't gather secret key")]
    NoSecretGathered,

    #[error("invalid nsec: {0}")]
    InvalidNsec(String),

    #[error("invalid secret key")]
    InvalidSecretKey,

    #[error("couldn't decrypt private key")]
    DecryptionExhausted,

    #[error("input interrupted")]
    Interrupted,

    #[error(transparent)]
    Prompt(PromptError),
}

impl From<PromptError> for ResolveError {
    fn from(err: PromptError) -> Self {
        match err {
            PromptError::Interrupted => ResolveError::Interrupted,
            other => ResolveError::Prompt(other),
        }
    }
}
