// Gitstr Auth: Library root
//
// Signing credential resolution for gitstr. Re-exports the config, prompt,
// secret, unlock, bunker, resolver and CLI modules.

pub mod bunker;
pub mod cli;
pub mod config;
pub mod error;
pub mod prompt;
pub mod resolver;
pub mod secret;
pub mod unlock;

pub use error::{GitstrError, Result};
pub use resolver::{Credential, CredentialResolver, ResolveError, ResolveOptions};
