// Gitstr Auth: Bunker error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BunkerError {
    #[error("invalid bunker url: {0}")]
    InvalidUrl(String),

    #[error("bunker handshake failed: {0}")]
    Handshake(String),
}
