// Gitstr Auth: Credential resolution
//
// Flow:
//   1. Bunker URL from `--connect` or `str.bunker`: connect, remember the URL,
//      done. A failed connection is returned as-is, with no local-key fallback.
//   2. Otherwise the secret from `--sec` (if given at all), else `str.secretkey`,
//      else asked for interactively.
//   3. ncryptsec: stored, then unlocked with the passphrase loop.
//      nsec / hex: decoded and validated, stored only if the user agrees to
//      it or `--store-sec` was passed.
//
// Git config is best effort: an unreadable setting counts as unset and a
// failed write is logged, so a usable credential is never lost to it.

use nostr::Keys;
use tokio_util::sync::CancellationToken;
use zeroize::Zeroizing;

use crate::bunker::BunkerConnector;
use crate::config::{ConfigStore, Scope, KEY_BUNKER, KEY_SECRET_KEY};
use crate::prompt::{ask, confirm, LineReader, PromptError};
use crate::secret::{classify, parse_secret, ParsedSecret, PlainKey, SecretError};
use crate::unlock::{decrypt_with_prompt, KeyDecryptor, UnlockError};

use super::ResolveError;

pub const SECRET_PROMPT: &str = "input secret key (hex, nsec or ncryptsec): ";
pub const STORE_PROMPT: &str = "store the secret key on git config? ";

/// Caller-supplied overrides. `sec: Some("")` is "given but empty", which
/// skips the stored secret and goes straight to prompting.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub connect: Option<String>,
    pub sec: Option<String>,
    pub store_sec: bool,
}

/// The signing credential for this invocation.
#[derive(Debug)]
pub enum Credential<S> {
    /// An open bunker session.
    Remote(S),
    /// A secret key that was given in plain form.
    Plain(PlainKey),
    /// A secret key unlocked from `ncryptsec` for this session only.
    Encrypted { ncryptsec: String, key: PlainKey },
}

impl<S> Credential<S> {
    /// The local secret key, if signing happens in-process.
    pub fn secret_key(&self) -> Option<&PlainKey> {
        match self {
            Credential::Remote(_) => None,
            Credential::Plain(key) | Credential::Encrypted { key, .. } => Some(key),
        }
    }

    pub fn source(&self) -> &'static str {
        match self {
            Credential::Remote(_) => "bunker",
            Credential::Plain(_) => "secret key",
            Credential::Encrypted { .. } => "encrypted secret key",
        }
    }
}

/// Where the secret string came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SecretSource {
    Option,
    Stored,
    Typed { ask_to_store: bool },
}

pub struct CredentialResolver<C, R, B, D> {
    config: C,
    reader: R,
    bunker: B,
    decryptor: D,
}

impl<C, R, B, D> CredentialResolver<C, R, B, D>
where
    C: ConfigStore,
    R: LineReader,
    B: BunkerConnector,
    D: KeyDecryptor,
{
    pub fn new(config: C, reader: R, bunker: B, decryptor: D) -> Self {
        Self {
            config,
            reader,
            bunker,
            decryptor,
        }
    }

    /// Resolve the credential. `cancel` aborts a pending bunker connection;
    /// terminal prompts are only interruptible from the keyboard.
    pub async fn resolve(
        &mut self,
        cancel: &CancellationToken,
        options: &ResolveOptions,
    ) -> Result<Credential<B::Session>, ResolveError> {
        if let Some(url) = self.bunker_url(options) {
            let session = self.connect_bunker(cancel, &url).await?;
            return Ok(Credential::Remote(session));
        }

        let (secret, source) = self.gather_secret(options)?;
        let parsed = parse_secret(&secret).map_err(|e| match e {
            SecretError::InvalidNsec(msg) => ResolveError::InvalidNsec(msg),
            _ => ResolveError::InvalidSecretKey,
        })?;

        match parsed {
            ParsedSecret::Encrypted(ncryptsec) => {
                self.remember(KEY_SECRET_KEY, &ncryptsec);

                let key = decrypt_with_prompt(&mut self.reader, &self.decryptor, &ncryptsec)
                    .map_err(|e| match e {
                        UnlockError::Exhausted => ResolveError::DecryptionExhausted,
                        UnlockError::Prompt(err) => ResolveError::from(err),
                    })?;
                Ok(Credential::Encrypted { ncryptsec, key })
            }
            ParsedSecret::Plain { key, format } => {
                tracing::debug!(?format, ?source, "using plain secret key");
                let ask_to_store = matches!(source, SecretSource::Typed { ask_to_store: true });
                if options.store_sec || (ask_to_store && self.confirm_store()?) {
                    self.remember(KEY_SECRET_KEY, key.as_hex());
                }
                Ok(Credential::Plain(key))
            }
        }
    }

    /// The bunker `resolve` will connect to, if any. When this is `None`
    /// resolution goes through the local-key path.
    pub fn bunker_url(&self, options: &ResolveOptions) -> Option<String> {
        if let Some(url) = options.connect.as_deref().filter(|u| !u.is_empty()) {
            return Some(url.to_string());
        }
        self.setting(KEY_BUNKER)
    }

    /// A non-empty repository-local setting. Read failures count as unset.
    fn setting(&self, key: &str) -> Option<String> {
        match self.config.get(key, Scope::Local) {
            Ok(value) => value.filter(|v| !v.is_empty()),
            Err(error) => {
                tracing::warn!(key, %error, "couldn't read git config, treating as unset");
                None
            }
        }
    }

    fn remember(&self, key: &str, value: &str) {
        match self.config.set(key, value) {
            Ok(()) => tracing::info!(key, "saved to git config"),
            Err(error) => tracing::warn!(key, %error, "couldn't save to git config"),
        }
    }

    async fn connect_bunker(
        &self,
        cancel: &CancellationToken,
        url: &str,
    ) -> Result<B::Session, ResolveError> {
        tracing::debug!(url, "connecting to bunker");
        let client_keys = Keys::generate();

        let session = tokio::select! {
            result = self.bunker.connect(client_keys, url) => result?,
            _ = cancel.cancelled() => return Err(ResolveError::Cancelled),
        };

        self.remember(KEY_BUNKER, url);
        Ok(session)
    }

    fn gather_secret(
        &mut self,
        options: &ResolveOptions,
    ) -> Result<(Zeroizing<String>, SecretSource), ResolveError> {
        if let Some(sec) = options.sec.as_deref().filter(|s| !s.is_empty()) {
            return Ok((Zeroizing::new(sec.to_string()), SecretSource::Option));
        }
        if options.sec.is_none() {
            if let Some(stored) = self.setting(KEY_SECRET_KEY) {
                return Ok((Zeroizing::new(stored), SecretSource::Stored));
            }
        }

        let mut ask_to_store = false;
        let answer = ask(&mut self.reader, SECRET_PROMPT, "", |answer| {
            if parse_secret(answer).is_err() {
                return true;
            }
            // Encrypted keys are always stored, so only plain ones are offered.
            ask_to_store = classify(answer).is_plain();
            false
        });

        let answer = match answer {
            Ok(answer) => Zeroizing::new(answer),
            Err(PromptError::Closed) => return Err(ResolveError::NoSecretGathered),
            Err(err) => return Err(err.into()),
        };
        if answer.is_empty() {
            return Err(ResolveError::NoSecretGathered);
        }
        Ok((answer, SecretSource::Typed { ask_to_store }))
    }

    /// Closed input counts as "no"; an interrupt is still an error.
    fn confirm_store(&mut self) -> Result<bool, ResolveError> {
        match confirm(&mut self.reader, STORE_PROMPT) {
            Ok(answer) => Ok(answer),
            Err(PromptError::Closed) => Ok(false),
            Err(err) => Err(err.into()),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
