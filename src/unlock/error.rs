// Gitstr Auth: Unlock error types

use thiserror::Error;

use crate::prompt::PromptError;

#[derive(Debug, Error)]
pub enum UnlockError {
    #[error("couldn't decrypt private key")]
    Exhausted,

    #[error(transparent)]
    Prompt(#[from] PromptError),
}
