// Gitstr Auth: Local Config Store
//
// Repository-scoped key/value settings. Production reads and writes go through
// `git config`, tests and library consumers can swap in the in-memory store.

mod error;
#[cfg(test)]
pub mod mock;
mod settings;
mod store;

pub use error::ConfigError;
pub use settings::{
    patch_relays, repository_id, repository_public_key, split_list, KEY_BUNKER, KEY_PATCHES_RELAY,
    KEY_PUBLIC_KEY, KEY_REPOSITORY_ID, KEY_SECRET_KEY,
};
pub use store::{ConfigStore, GitConfigStore, MemoryConfigStore, Scope};
