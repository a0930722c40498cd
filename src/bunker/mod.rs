// Gitstr Auth: Remote Signer
//
// Connects to a NIP-46 remote signer ("bunker") with a throwaway client
// identity. The user's key never leaves the bunker.

mod connector;
mod error;

#[cfg(test)]
pub mod mock;

pub use connector::{BunkerConnector, BunkerSession, NostrConnectBunker, DEFAULT_TIMEOUT};
pub use error::BunkerError;
