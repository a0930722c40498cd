// Gitstr Auth: Prompt error types

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input interrupted")]
    Interrupted,

    #[error("input closed before an answer was given")]
    Closed,

    #[error("terminal error: {0}")]
    Io(io::Error),
}

impl From<io::Error> for PromptError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::Interrupted => PromptError::Interrupted,
            io::ErrorKind::UnexpectedEof => PromptError::Closed,
            _ => PromptError::Io(err),
        }
    }
}
