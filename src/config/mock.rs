// Gitstr Auth: Failing config store for tests

use super::{ConfigError, ConfigStore, Scope};

/// A store whose every read and write fails the way git does outside a
/// repository.
#[derive(Debug, Default)]
pub struct BrokenConfigStore;

impl BrokenConfigStore {
    fn error(args: &str) -> ConfigError {
        ConfigError::Git {
            args: args.to_string(),
            status: 128,
            stderr: "fatal: --local can only be used inside a git repository".to_string(),
        }
    }
}

impl ConfigStore for BrokenConfigStore {
    fn get(&self, key: &str, _scope: Scope) -> Result<Option<String>, ConfigError> {
        Err(Self::error(&format!("--local {}", key)))
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), ConfigError> {
        Err(Self::error(&format!("--local {}", key)))
    }
}
