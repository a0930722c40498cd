// Gitstr Auth: Bunker connector

use std::time::Duration;

use async_trait::async_trait;
use nostr::nips::nip46::NostrConnectURI;
use nostr::{Keys, NostrSigner, PublicKey};
use nostr_connect::prelude::NostrConnect;

use super::BunkerError;

/// How long the protocol library waits for the bunker to answer a request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Abstraction over establishing a remote signer session, enabling the
/// NIP-46 client in production and fakes in tests.
#[async_trait]
pub trait BunkerConnector: Send + Sync {
    /// Open session handle; ownership passes to the caller.
    type Session: Send;

    /// Connect to `url` authenticating as `client_keys`. A returned session
    /// has completed the handshake.
    async fn connect(&self, client_keys: Keys, url: &str) -> Result<Self::Session, BunkerError>;
}

#[async_trait]
impl<T: BunkerConnector + ?Sized> BunkerConnector for &T {
    type Session = T::Session;

    async fn connect(&self, client_keys: Keys, url: &str) -> Result<Self::Session, BunkerError> {
        (**self).connect(client_keys, url).await
    }
}

/// A connected NIP-46 signer together with the user's public key.
pub struct BunkerSession {
    signer: NostrConnect,
    public_key: PublicKey,
}

impl BunkerSession {
    pub fn public_key(&self) -> PublicKey {
        self.public_key
    }

    pub fn signer(&self) -> &NostrConnect {
        &self.signer
    }

    pub fn into_signer(self) -> NostrConnect {
        self.signer
    }
}

impl std::fmt::Debug for BunkerSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BunkerSession")
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
pub struct NostrConnectBunker {
    timeout: Duration,
}

impl NostrConnectBunker {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for NostrConnectBunker {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

#[async_trait]
impl BunkerConnector for NostrConnectBunker {
    type Session = BunkerSession;

    async fn connect(&self, client_keys: Keys, url: &str) -> Result<BunkerSession, BunkerError> {
        let uri = NostrConnectURI::parse(url).map_err(|e| BunkerError::InvalidUrl(e.to_string()))?;
        let signer = NostrConnect::new(uri, client_keys, self.timeout, None)
            .map_err(|e| BunkerError::Handshake(e.to_string()))?;

        // The first request drives the connect handshake with the bunker.
        let public_key = signer
            .get_public_key()
            .await
            .map_err(|e| BunkerError::Handshake(e.to_string()))?;
        tracing::info!(%public_key, "connected to bunker");

        Ok(BunkerSession { signer, public_key })
    }
}
