// Gitstr Auth: CLI Command Handlers
//
// Each function handles one subcommand. `whoami` wires the production
// collaborators (git config, terminal prompts, NIP-46, NIP-49) into the
// credential resolver.

use nostr::nips::nip19::ToBech32;
use nostr::PublicKey;
use tokio_util::sync::CancellationToken;

use crate::bunker::NostrConnectBunker;
use crate::config::{self, GitConfigStore};
use crate::error::GitstrError;
use crate::prompt::{PromptTheme, TerminalReader};
use crate::resolver::{Credential, CredentialResolver};
use crate::secret::SecretError;
use crate::unlock::Nip49Decryptor;

use super::{Cli, Commands};

/// Execute the parsed CLI command.
pub async fn execute(cli: Cli) -> Result<(), GitstrError> {
    let store = match &cli.dir {
        Some(dir) => GitConfigStore::new(dir),
        None => GitConfigStore::current_dir(),
    };

    match cli.command {
        Commands::Whoami => cmd_whoami(&cli, store).await,
        Commands::Relays => cmd_relays(&store),
        Commands::Repo => cmd_repo(&store),
    }
}

// ─── Whoami ──────────────────────────────────────────────────────────────────

async fn cmd_whoami(cli: &Cli, store: GitConfigStore) -> Result<(), GitstrError> {
    let theme = PromptTheme {
        colored: !cli.no_color,
        ..PromptTheme::default()
    };
    let mut resolver = CredentialResolver::new(
        store,
        TerminalReader::new(theme),
        NostrConnectBunker::default(),
        Nip49Decryptor,
    );

    let options = cli.resolve_options();

    // Ctrl-C is only taken over while a bunker connection is pending. Once
    // tokio owns SIGINT it keeps it, so the local-key path, whose prompts
    // can't observe the token, never installs the handler.
    let cancel = CancellationToken::new();
    let watcher = resolver
        .bunker_url(&options)
        .map(|_| tokio::spawn(cancel_on_ctrl_c(cancel.clone())));

    let result = resolver.resolve(&cancel, &options).await;
    if let Some(watcher) = watcher {
        watcher.abort();
    }
    let credential = result?;
    let public_key = match &credential {
        Credential::Remote(session) => session.public_key(),
        Credential::Plain(key) | Credential::Encrypted { key, .. } => key.public_key()?,
    };

    println!("{}", npub(&public_key)?);
    println!("  source: {}", credential.source());
    Ok(())
}

async fn cancel_on_ctrl_c(cancel: CancellationToken) {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::debug!("interrupted, cancelling bunker connection");
        cancel.cancel();
    }
}

fn npub(public_key: &PublicKey) -> Result<String, GitstrError> {
    public_key
        .to_bech32()
        .map_err(|e| GitstrError::Secret(SecretError::Encode(e.to_string())))
}

// ─── Relays ──────────────────────────────────────────────────────────────────

fn cmd_relays(store: &GitConfigStore) -> Result<(), GitstrError> {
    let relays = config::patch_relays(store)?;
    if relays.is_empty() {
        println!("No patch relays configured.");
        println!("Set some with: git config {} \"wss://relay.one wss://relay.two\"", config::KEY_PATCHES_RELAY);
        return Ok(());
    }
    for relay in relays {
        println!("{}", relay);
    }
    Ok(())
}

// ─── Repo ────────────────────────────────────────────────────────────────────

fn cmd_repo(store: &GitConfigStore) -> Result<(), GitstrError> {
    match config::repository_id(store)? {
        Some(id) => println!("  ID:     {}", id),
        None => println!("  ID:     (not set, {})", config::KEY_REPOSITORY_ID),
    }
    match config::repository_public_key(store)? {
        Some(pk) => {
            let owner = PublicKey::from_hex(&pk)
                .map_err(|e| GitstrError::Other(format!("invalid public key: {}", e)))?;
            println!("  Owner:  {}", npub(&owner)?);
        }
        None => println!("  Owner:  (not set, {})", config::KEY_PUBLIC_KEY),
    }
    Ok(())
}
