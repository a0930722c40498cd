// Gitstr Auth: Setting names and typed accessors

use nostr::PublicKey;

use super::{ConfigError, ConfigStore, Scope};

/// Remote signer (NIP-46 bunker) URL.
pub const KEY_BUNKER: &str = "str.bunker";

/// Stored secret: hex, nsec or ncryptsec.
pub const KEY_SECRET_KEY: &str = "str.secretkey";

/// Relays patches are published to, separated by spaces or commas.
pub const KEY_PATCHES_RELAY: &str = "str.patches-relay";

/// Repository identifier (the `d` tag of its announcement).
pub const KEY_REPOSITORY_ID: &str = "str.id";

/// Hex public key of the repository owner.
pub const KEY_PUBLIC_KEY: &str = "str.publickey";

/// Split a list on spaces and commas, dropping empty entries.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split([' ', ','])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Relays configured for patches, from any config scope.
pub fn patch_relays(store: &impl ConfigStore) -> Result<Vec<String>, ConfigError> {
    Ok(store
        .get(KEY_PATCHES_RELAY, Scope::Any)?
        .map(|raw| split_list(&raw))
        .unwrap_or_default())
}

pub fn repository_id(store: &impl ConfigStore) -> Result<Option<String>, ConfigError> {
    Ok(store
        .get(KEY_REPOSITORY_ID, Scope::Local)?
        .filter(|id| !id.is_empty()))
}

/// The configured owner key, or `None` if unset or not a valid public key.
pub fn repository_public_key(store: &impl ConfigStore) -> Result<Option<String>, ConfigError> {
    let Some(pk) = store.get(KEY_PUBLIC_KEY, Scope::Any)? else {
        return Ok(None);
    };
    if pk.len() == 64 && PublicKey::from_hex(&pk).is_ok() {
        Ok(Some(pk))
    } else {
        tracing::warn!(key = KEY_PUBLIC_KEY, "ignoring invalid repository public key");
        Ok(None)
    }
}
