// Gitstr Auth: Fake bunker for tests

use std::sync::Mutex;

use async_trait::async_trait;
use nostr::Keys;

use super::{BunkerConnector, BunkerError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeSession {
    pub url: String,
}

/// Records connection attempts; succeeds unless built with `failing()`.
#[derive(Default)]
pub struct FakeBunker {
    fail: bool,
    attempts: Mutex<Vec<String>>,
}

impl FakeBunker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            attempts: Mutex::new(Vec::new()),
        }
    }

    pub fn attempts(&self) -> Vec<String> {
        self.attempts.lock().unwrap().clone()
    }
}

#[async_trait]
impl BunkerConnector for FakeBunker {
    type Session = FakeSession;

    async fn connect(&self, _client_keys: Keys, url: &str) -> Result<FakeSession, BunkerError> {
        self.attempts.lock().unwrap().push(url.to_string());
        if self.fail {
            return Err(BunkerError::Handshake("connection refused".to_string()));
        }
        Ok(FakeSession {
            url: url.to_string(),
        })
    }
}

/// A connector whose handshake never finishes.
pub struct HangingBunker;

#[async_trait]
impl BunkerConnector for HangingBunker {
    type Session = FakeSession;

    async fn connect(&self, _client_keys: Keys, _url: &str) -> Result<FakeSession, BunkerError> {
        std::future::pending().await
    }
}
