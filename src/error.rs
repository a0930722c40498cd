// Gitstr Auth: Top-level error types
//
// Aggregates the module errors into a single enum for the binary boundary.

use thiserror::Error;

/// Top-level error type for gitstr-auth commands.
#[derive(Debug, Error)]
pub enum GitstrError {
    #[error(transparent)]
    Resolve(#[from] crate::resolver::ResolveError),

    #[error("Config error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("Key error: {0}")]
    Secret(#[from] crate::secret::SecretError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, GitstrError>;
