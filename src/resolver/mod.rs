// Gitstr Auth: Credential Resolver
//
// Decides where this invocation's signing credential comes from: a bunker,
// a plain secret key, or an encrypted secret key. It reads and writes the
// repository config so later runs reuse the same choice without prompting.

mod error;
mod resolve;

pub use error::ResolveError;
pub use resolve::{Credential, CredentialResolver, ResolveOptions, SECRET_PROMPT, STORE_PROMPT};
