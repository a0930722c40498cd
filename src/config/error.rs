// Gitstr Auth: Config error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to run git: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("git {args} exited with {status}: {stderr}")]
    Git {
        args: String,
        status: i32,
        stderr: String,
    },

    #[error("config value for {0} is not valid UTF-8")]
    InvalidUtf8(String),
}
