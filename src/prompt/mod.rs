// Gitstr Auth: Interactive Prompt Engine
//
// Separates "how a line is read" (`LineReader`) from "what counts as an
// acceptable answer" (the retry predicate on `Prompt`). Secret gathering,
// yes/no confirmation and passphrase entry all share the same loop.

mod engine;
mod error;
mod terminal;

#[cfg(test)]
pub mod mock;

pub use engine::{ask, ask_secret, confirm, LineReader, Prompt};
pub use error::PromptError;
pub use terminal::{is_piped, PromptTheme, TerminalReader};
